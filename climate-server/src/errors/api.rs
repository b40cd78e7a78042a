use axum::extract::rejection::JsonRejection;

use super::ReadingError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Reading error: {0}")]
    ReadingError(#[from] ReadingError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}
