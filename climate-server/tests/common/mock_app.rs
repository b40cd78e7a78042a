use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderValue, Method, Request, Response};
use climate_api::models::ReadingRequest;
use climate_server::app::{create_app, create_router};
use climate_server::configs::Settings;
use climate_server::services::{AlertService, DeviceRegistry, DeviceService, ReadingService};
use serde_json::Value;
use tower::ServiceExt;

pub const DEVICE_SECRET: &str = "secret-MOCK-001";

pub struct MockApp {
    pub settings: Arc<Settings>,
    pub router: Router,
}

impl MockApp {
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Extra TOML appended after the server, logger and devices sections.
    pub fn with_config(extra: &str) -> Self {
        let config = format!(
            r#"
            [server]
            host = "127.0.0.1"
            port = 0

            [logger]
            level = "debug"

            [devices]
            secrets = ["{DEVICE_SECRET}", "secret-MOCK-002"]

            {extra}
            "#
        );

        let settings = Arc::new(Settings::from_toml(&config).unwrap());
        let router = create_app(&settings);

        Self { settings, router }
    }

    /// Default settings, but device secrets are checked against `registry`.
    pub fn with_registry(registry: Arc<dyn DeviceRegistry>) -> Self {
        let app = Self::new();
        let reading_service = Arc::new(ReadingService::new(
            Arc::new(DeviceService::new(registry)),
            Arc::new(AlertService::new(app.settings.alerts.rules.clone())),
        ));

        Self {
            router: create_router(reading_service),
            ..app
        }
    }

    pub async fn evaluate(&self, secret: Option<&str>, body: impl Into<Body>) -> Response<Body> {
        let secret = secret.map(|secret| HeaderValue::from_str(secret).unwrap());

        self.evaluate_with_header(secret, body).await
    }

    pub async fn evaluate_with_header(
        &self,
        secret: Option<HeaderValue>,
        body: impl Into<Body>,
    ) -> Response<Body> {
        let mut request = Request::builder()
            .uri("/readings/evaluate")
            .method(Method::POST)
            .header("Content-Type", "application/json");

        if let Some(secret) = secret {
            request = request.header("x-device-shared-secret", secret);
        }

        self.router
            .clone()
            .oneshot(request.body(body.into()).unwrap())
            .await
            .unwrap()
    }

    pub async fn evaluate_reading(&self, secret: Option<&str>, reading: &ReadingRequest) -> Response<Body> {
        self.evaluate(secret, serde_json::to_string(reading).unwrap()).await
    }
}

pub fn reading(firmware_version: &str, temperature: f64, humidity: f64) -> ReadingRequest {
    ReadingRequest {
        firmware_version: firmware_version.to_string(),
        temperature,
        humidity,
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&body).unwrap()
}
