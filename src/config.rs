//! Application-level configuration loading: asset locations and the analysis endpoint.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dao::text_generation::TextGenerationConfig;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";
const DEFAULT_STATIC_DIR: &str = "static";
/// Scoreboard file name, resolved relative to the static-assets root.
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_INDEX_FILE: &str = "templates/index.html";

#[derive(Debug, Clone, PartialEq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Static-assets root served under `/static`.
    pub static_dir: PathBuf,
    /// Location of the persisted scoreboard document.
    pub data_path: PathBuf,
    /// Page served at `/`.
    pub index_file: PathBuf,
    /// How to reach the text-generation endpoint.
    pub analysis: TextGenerationConfig,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        data = %app_config.data_path.display(),
                        "loaded configuration"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a configuration document; absent keys take their default value.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    static_dir: PathBuf,
    data_file: PathBuf,
    index_file: PathBuf,
    analysis: RawAnalysis,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            analysis: RawAnalysis::default(),
        }
    }
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            data_path: value.static_dir.join(&value.data_file),
            static_dir: value.static_dir,
            index_file: value.index_file,
            analysis: value.analysis.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
/// JSON representation of the `analysis` section.
struct RawAnalysis {
    endpoint: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
}

impl From<RawAnalysis> for TextGenerationConfig {
    fn from(value: RawAnalysis) -> Self {
        let mut config = value
            .endpoint
            .map(TextGenerationConfig::new)
            .unwrap_or_default();
        if let Some(model) = value.model {
            config = config.with_model(model);
        }
        if let Some(secs) = value.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::text_generation::TextGenerationConfig;

    #[test]
    fn defaults_place_document_under_static_root() {
        let config = AppConfig::default();
        assert_eq!(config.data_path, PathBuf::from("static/data.json"));
        assert_eq!(config.index_file, PathBuf::from("templates/index.html"));
        assert_eq!(config.analysis, TextGenerationConfig::default());
        assert_eq!(config.analysis.timeout, Duration::from_secs(30));
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = AppConfig::from_json(
            r#"{"static_dir": "public", "analysis": {"model": "mistral", "timeout_secs": 5}}"#,
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("public/data.json"));
        assert_eq!(config.analysis.model, "mistral");
        assert_eq!(config.analysis.timeout, Duration::from_secs(5));
        assert_eq!(config.analysis.endpoint, "https://text.pollinations.ai/");
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(AppConfig::from_json("[1, 2]").is_err());
    }
}
