use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    /// Firmware version reported by the device, semantic versioning format
    pub firmware_version: String,
    /// Temperature reading in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
}
