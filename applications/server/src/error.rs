/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] RosterError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) | ServerError::Store(RosterError::UserNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ServerError::BadRequest(_) | ServerError::Store(RosterError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ServerError::NotFound(msg) | ServerError::BadRequest(msg) => json!({ "error": msg }),
            ServerError::Store(RosterError::UserNotFound(_)) => {
                json!({ "error": "User not found" })
            }
            ServerError::Store(RosterError::Validation(msg)) => {
                tracing::warn!("Rejected request: {}", msg);
                json!({ "error": msg })
            }
            ServerError::Store(ref e) => {
                tracing::error!("Persistence error: {:?}", e);
                json!({ "error": "Persistence error", "details": e.to_string() })
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                json!({ "error": "Configuration error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
