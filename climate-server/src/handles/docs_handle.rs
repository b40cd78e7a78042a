use axum::routing::get;
use axum::{Json, Router};
use climate_api::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(super::reading_handle::evaluate_reading),
    components(schemas(ReadingRequest, Alert, AlertType, Severity, ProblemDetails)),
    tags(
        (name = "reading", description = "Device reading evaluation")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
