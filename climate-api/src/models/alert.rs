use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Metric::Temperature => write!(f, "Temperature"),
            Metric::Humidity => write!(f, "Humidity"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Temperature above an upper limit
    TemperatureHigh,
    /// Temperature below a lower limit
    TemperatureLow,
    /// Humidity above an upper limit
    HumidityHigh,
    /// Humidity below a lower limit
    HumidityLow,
}

impl AlertType {
    pub fn metric(&self) -> Metric {
        match self {
            AlertType::TemperatureHigh | AlertType::TemperatureLow => Metric::Temperature,
            AlertType::HumidityHigh | AlertType::HumidityLow => Metric::Humidity,
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Alert category
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Alert severity
    pub severity: Severity,
    /// Which threshold was crossed and by how much
    pub message: String,
}
