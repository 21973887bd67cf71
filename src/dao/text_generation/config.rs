use std::time::Duration;

/// Endpoint queried when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://text.pollinations.ai/";
/// Model requested when no configuration overrides it.
pub const DEFAULT_MODEL: &str = "openai";
/// Upper bound on a single relay call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration describing how to reach the text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGenerationConfig {
    /// URL receiving the chat request.
    pub endpoint: String,
    /// Model name forwarded to the endpoint.
    pub model: String,
    /// Upper bound on the whole request, response body included.
    pub timeout: Duration,
}

impl TextGenerationConfig {
    /// Construct a configuration for `endpoint` using the default model and timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the requested model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TextGenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
