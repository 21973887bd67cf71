use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use super::{
    TextGenerator,
    config::TextGenerationConfig,
    error::{RelayError, RelayResult},
};

/// Chat-style request body understood by the Pollinations text endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest<'a> {
    messages: [ChatMessage<'a>; 1],
    model: &'a str,
    /// Free-text output rather than a JSON object.
    json_mode: bool,
    /// Keep the exchange out of the provider's public feed.
    private: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// HTTP client relaying prompts to a Pollinations-compatible endpoint.
#[derive(Clone)]
pub struct PollinationsClient {
    client: Client,
    endpoint: Arc<str>,
    model: Arc<str>,
}

impl PollinationsClient {
    /// Build a client honouring the configured endpoint, model, and timeout.
    pub fn new(config: TextGenerationConfig) -> RelayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| RelayError::ClientBuilder { source })?;

        Ok(Self {
            client,
            endpoint: Arc::from(config.endpoint),
            model: Arc::from(config.model),
        })
    }

    async fn post_prompt(&self, prompt: &str) -> RelayResult<String> {
        let body = ChatRequest {
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            model: &self.model,
            json_mode: false,
            private: true,
        };

        let response = self
            .client
            .post(self.endpoint.as_ref())
            .json(&body)
            .send()
            .await
            .map_err(RelayError::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RelayError::Status { status });
        }

        let text = response.text().await.map_err(RelayError::from_transport)?;
        debug!(bytes = text.len(), "text-generation response received");
        Ok(text)
    }
}

impl TextGenerator for PollinationsClient {
    fn generate(&self, prompt: String) -> BoxFuture<'static, RelayResult<String>> {
        let client = self.clone();
        Box::pin(async move { client.post_prompt(&prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_endpoint_contract() {
        let body = ChatRequest {
            messages: [ChatMessage {
                role: "user",
                content: "How is the game going?",
            }],
            model: "openai",
            json_mode: false,
            private: true,
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "messages": [{"role": "user", "content": "How is the game going?"}],
                "model": "openai",
                "jsonMode": false,
                "private": true
            })
        );
    }
}
