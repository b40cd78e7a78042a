mod settings;

pub use settings::{Alerts, Devices, Logger, Server, Settings};
