use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::pipe::PipeError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything a user request can fail with.
///
/// Each variant maps onto exactly one HTTP status; the response body is the
/// plain-text status message and nothing else.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("User {id} not found")]
    NotFound { id: u32 },

    #[error("Persistence failure: {0}")]
    Persistence(#[from] sea_orm::DbErr),

    #[error("Serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) | ApiError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The body sent to the client. Internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MalformedInput(_) => "Bad Request",
            ApiError::NotFound { .. } => "User not found",
            ApiError::Persistence(_) | ApiError::Serialization(_) => "Internal Server Error",
        }
    }
}

impl From<PipeError> for ApiError {
    fn from(err: PipeError) -> Self {
        ApiError::MalformedInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, self.public_message()).into_response()
    }
}
