use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Lesson not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PortalError {
    /// True only for the no-response-received case, the one failure the
    /// service client is allowed to recover from.
    pub fn is_network(&self) -> bool {
        matches!(self, PortalError::Network(_))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            PortalError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            PortalError::NotFound => (StatusCode::NOT_FOUND, "Lesson not found".to_string()),
            PortalError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            other => {
                error!("internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
