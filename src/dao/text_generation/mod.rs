mod config;
mod error;
mod pollinations;

pub use config::TextGenerationConfig;
pub use error::{RelayError, RelayResult};
pub use pollinations::PollinationsClient;

use futures::future::BoxFuture;

/// Opaque prompt-in/text-out service producing natural-language commentary.
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` as a single user message and return the raw response text.
    fn generate(&self, prompt: String) -> BoxFuture<'static, RelayResult<String>>;
}
