use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::TypedHeader;
use climate_api::models::*;

use crate::errors::ApiError;
use crate::headers::DeviceSecret;
use crate::services::{ReadingService, ReadingSubmission};

#[derive(Clone)]
pub struct ReadingState {
    pub reading_service: Arc<ReadingService>,
}

pub fn reading_router(reading_state: ReadingState) -> Router {
    Router::new()
        .route("/readings/evaluate", post(evaluate_reading))
        .with_state(reading_state)
}

#[utoipa::path(
    post,
    path = "/readings/evaluate",
    tag = "reading",
    params(
        ("x-device-shared-secret" = String, Header, description = "Shared secret of the submitting device")
    ),
    request_body = ReadingRequest,
    responses(
        (status = 200, description = "Reading evaluated, return raised alerts", body = [Alert]),
        (status = 400, description = "Malformed firmware version or request body", body = ProblemDetails, content_type = "application/problem+json"),
        (status = 401, description = "Unknown device secret", body = ProblemDetails, content_type = "application/problem+json"),
        (status = 500, description = "Internal server error", body = ProblemDetails, content_type = "application/problem+json")
    )
)]
pub async fn evaluate_reading(
    State(state): State<ReadingState>,
    device_secret: Option<TypedHeader<DeviceSecret>>,
    body: Result<Json<ReadingRequest>, JsonRejection>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let Json(request) = body?;

    // A missing header is checked like an empty secret, after the firmware version.
    let device_secret = device_secret
        .map(|TypedHeader(secret)| secret.into_inner())
        .unwrap_or_default();

    let submission = ReadingSubmission::new(device_secret, request);

    // The registry lookup may block, keep it off the async workers.
    let reading_service = state.reading_service.clone();
    let alerts = tokio::task::spawn_blocking(move || reading_service.evaluate(&submission))
        .await
        .map_err(|e| anyhow!("Reading evaluation failed: {}", e))??;

    Ok(Json(alerts))
}
