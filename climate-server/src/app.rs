use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::{AlertService, DeviceService, ReadingService, SecretRegistry};

pub fn create_app(settings: &Arc<Settings>) -> Router {
    let registry = SecretRegistry::from(&settings.devices);
    if registry.is_empty() {
        tracing::warn!("no device secrets configured, every reading will be rejected");
    }

    tracing::info!(
        devices = registry.len(),
        rules = settings.alerts.rules.len(),
        "reading pipeline configured"
    );

    let device_service = Arc::new(DeviceService::new(Arc::new(registry)));
    let alert_service = Arc::new(AlertService::new(settings.alerts.rules.clone()));
    let reading_service = Arc::new(ReadingService::new(device_service, alert_service));

    create_router(reading_service)
}

pub fn create_router(reading_service: Arc<ReadingService>) -> Router {
    Router::new()
        .merge(reading_router(ReadingState { reading_service }))
        .merge(docs_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
