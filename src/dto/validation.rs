//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest language tag accepted, matching the BCP 47 recommended buffer size.
const MAX_LANG_LEN: usize = 35;

/// Validates that a language code looks like a BCP 47 tag (`en`, `zh-CN`, ...).
///
/// # Examples
///
/// ```ignore
/// validate_lang("en")     // Ok
/// validate_lang("zh-CN")  // Ok
/// validate_lang("")       // Err - empty
/// validate_lang("en us")  // Err - space
/// ```
pub fn validate_lang(lang: &str) -> Result<(), ValidationError> {
    if lang.is_empty() || lang.len() > MAX_LANG_LEN {
        let mut err = ValidationError::new("lang_length");
        err.message = Some(
            format!(
                "Language code must be 1 to {MAX_LANG_LEN} characters (got {})",
                lang.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        let mut err = ValidationError::new("lang_format");
        err.message =
            Some("Language code must contain only ASCII letters, digits, '-' or '_'".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_lang_valid() {
        assert!(validate_lang("en").is_ok());
        assert!(validate_lang("zh-CN").is_ok());
        assert!(validate_lang("pt_BR").is_ok());
    }

    #[test]
    fn test_validate_lang_invalid_length() {
        assert!(validate_lang("").is_err());
        assert!(validate_lang(&"a".repeat(36)).is_err());
    }

    #[test]
    fn test_validate_lang_invalid_format() {
        assert!(validate_lang("en us").is_err());
        assert!(validate_lang("fr/FR").is_err());
        assert!(validate_lang("中文").is_err());
    }
}
