use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    dao::{storage::StorageError, text_generation::RelayError},
    state::ScoreboardError,
};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The document refused the mutation.
    #[error(transparent)]
    Rejected(#[from] ScoreboardError),
    /// Analysis requested without any player.
    #[error("No player data provided")]
    NoPlayerData,
    /// The updated document could not be saved.
    #[error("Failed to save data")]
    Persistence(#[source] StorageError),
    /// The text-generation endpoint did not answer in time.
    #[error("Request timed out. Please try again.")]
    UpstreamTimeout,
    /// The text-generation endpoint answered with a non-200 status.
    #[error("API request failed with status {0}")]
    UpstreamStatus(u16),
    /// The text-generation endpoint could not be reached.
    #[error("Network error: {0}")]
    UpstreamNetwork(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Persistence(err)
    }
}

impl From<RelayError> for ServiceError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Timeout { .. } => ServiceError::UpstreamTimeout,
            RelayError::Status { status } => ServiceError::UpstreamStatus(status.as_u16()),
            RelayError::Network { source } => ServiceError::UpstreamNetwork(source.to_string()),
            other @ RelayError::ClientBuilder { .. } => {
                ServiceError::UpstreamNetwork(other.to_string())
            }
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("{0}")]
    BadRequest(String),
    /// Upstream dependency did not answer in time.
    #[error("{0}")]
    GatewayTimeout(String),
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::Rejected(ScoreboardError::RowTooLong(_)) => AppError::Internal(message),
            ServiceError::Rejected(_) | ServiceError::NoPlayerData => {
                AppError::BadRequest(message)
            }
            ServiceError::UpstreamTimeout => AppError::GatewayTimeout(message),
            ServiceError::Persistence(_)
            | ServiceError::UpstreamStatus(_)
            | ServiceError::UpstreamNetwork(_) => AppError::Internal(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, payload).into_response()
    }
}
