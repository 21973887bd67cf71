//! Error types returned by the text-generation relay.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`RelayError`] failures.
pub type RelayResult<T> = Result<T, RelayError>;

/// Failures that can occur while relaying a prompt to the text-generation endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build text-generation client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint did not answer within the configured timeout.
    #[error("text-generation request timed out")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    /// The endpoint answered with a status other than 200.
    #[error("text-generation endpoint returned status {status}")]
    Status { status: StatusCode },
    /// Any other transport failure (DNS, connection refused, truncated body).
    #[error("failed to reach text-generation endpoint: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
}

impl RelayError {
    /// Classify a transport error, separating timeouts from other failures.
    pub fn from_transport(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            RelayError::Timeout { source }
        } else {
            RelayError::Network { source }
        }
    }
}
