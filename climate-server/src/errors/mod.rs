pub mod api;
pub mod reading;

pub use api::ApiError;
pub use reading::ReadingError;

use std::collections::BTreeMap;

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use climate_api::models::ProblemDetails;
use uuid::Uuid;

const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const UNAUTHORIZED_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.2";
const INTERNAL_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";
const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ReadingError(e) => e.status_code(),
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn problem(status: StatusCode, problem_type: &str, title: &str) -> ProblemDetails {
    ProblemDetails {
        problem_type: problem_type.to_string(),
        title: title.to_string(),
        status: status.as_u16(),
        detail: None,
        errors: None,
        error_id: None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::ReadingError(e) => match e.field() {
                Some(field) => ProblemDetails {
                    errors: Some(BTreeMap::from([(field.to_string(), vec![e.to_string()])])),
                    ..problem(status, BAD_REQUEST_TYPE, VALIDATION_TITLE)
                },
                None => ProblemDetails {
                    detail: Some(e.to_string()),
                    ..problem(status, UNAUTHORIZED_TYPE, "Unauthorized")
                },
            },
            ApiError::InvalidRequest(message) => ProblemDetails {
                detail: Some(message.clone()),
                ..problem(status, BAD_REQUEST_TYPE, VALIDATION_TITLE)
            },
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {:#}", e);

                ProblemDetails {
                    error_id: Some(error_id.to_string()),
                    ..problem(status, INTERNAL_ERROR_TYPE, "Internal server error")
                }
            }
        };

        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), "request rejected: {}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}
