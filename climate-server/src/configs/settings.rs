use std::env;
use std::net::{IpAddr, SocketAddr};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::services::AlertRule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    /// Socket address the listener binds. The host must be an IP literal.
    pub fn address(&self) -> Result<SocketAddr, ConfigError> {
        let ip_addr = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::Message(format!("Invalid server host {:?}: {}", self.host, e)))?;

        Ok(SocketAddr::from((ip_addr, self.port)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

impl Logger {
    const TARGETS: [&'static str; 3] = ["climate_server", "climate_api", "tower_http"];

    pub fn directives(&self) -> String {
        Self::TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Filter used when `RUST_LOG` is unset. An unknown level is an error
    /// rather than a silently dropped directive.
    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(self.directives())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Devices {
    /// Shared secrets accepted from the `x-device-shared-secret` header
    #[serde(default)]
    pub secrets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alerts {
    #[serde(default = "AlertRule::defaults")]
    pub rules: Vec<AlertRule>,
}

impl Default for Alerts {
    fn default() -> Self {
        Self {
            rules: AlertRule::defaults(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    #[serde(default)]
    pub devices: Devices,
    #[serde(default)]
    pub alerts: Alerts,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let builder = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(
                Environment::with_prefix("CLIMATE")
                    .separator("_")
                    .list_separator(",")
                    .with_list_parse_key("devices.secrets")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    /// Settings from a TOML document alone, without files or environment.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(content, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
