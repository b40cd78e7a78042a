use std::sync::Arc;

use climate_api::VersionValidator;
use climate_api::models::{Alert, ReadingRequest};

use super::{AlertService, DeviceService};
use crate::errors::ReadingError;

/// A single device submission: the secret from the request header plus the body.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSubmission {
    pub device_secret: String,
    pub firmware_version: String,
    pub temperature: f64,
    pub humidity: f64,
}

impl ReadingSubmission {
    pub fn new(device_secret: impl Into<String>, request: ReadingRequest) -> Self {
        Self {
            device_secret: device_secret.into(),
            firmware_version: request.firmware_version,
            temperature: request.temperature,
            humidity: request.humidity,
        }
    }
}

/// Firmware version check, then device authorization, then alert evaluation.
/// The first failing check ends the evaluation.
pub struct ReadingService {
    device_service: Arc<DeviceService>,
    alert_service: Arc<AlertService>,
}

impl ReadingService {
    pub fn new(device_service: Arc<DeviceService>, alert_service: Arc<AlertService>) -> Self {
        Self {
            device_service,
            alert_service,
        }
    }

    pub fn evaluate(&self, submission: &ReadingSubmission) -> Result<Vec<Alert>, ReadingError> {
        if !VersionValidator::is_valid(&submission.firmware_version) {
            // Devices answer this rejection by requesting a firmware update.
            tracing::warn!(
                firmware_version = %submission.firmware_version,
                "reading rejected: malformed firmware version, firmware update required"
            );
            return Err(ReadingError::MalformedVersion);
        }

        tracing::debug!(firmware_version = %submission.firmware_version, "firmware version checked");

        if !self.device_service.authorize(&submission.device_secret) {
            tracing::warn!("reading rejected: unknown device secret");
            return Err(ReadingError::UnauthorizedDevice);
        }

        let alerts = self
            .alert_service
            .evaluate(submission.temperature, submission.humidity);

        tracing::info!(
            temperature = submission.temperature,
            humidity = submission.humidity,
            alerts = alerts.len(),
            "reading evaluated"
        );

        Ok(alerts)
    }
}
