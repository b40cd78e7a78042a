use axum::http::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    #[error("The firmware value does not match semantic versioning format.")]
    MalformedVersion,

    #[error("Device secret is not within the valid range.")]
    UnauthorizedDevice,
}

impl ReadingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReadingError::MalformedVersion => StatusCode::BAD_REQUEST,
            ReadingError::UnauthorizedDevice => StatusCode::UNAUTHORIZED,
        }
    }

    /// Request field the error is reported against, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ReadingError::MalformedVersion => Some("FirmwareVersion"),
            ReadingError::UnauthorizedDevice => None,
        }
    }
}
