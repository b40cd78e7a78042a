use std::collections::HashSet;
use std::sync::Arc;

use crate::configs::Devices;

/// Source of truth for device shared secrets.
pub trait DeviceRegistry: Send + Sync {
    fn is_valid_secret(&self, secret: &str) -> bool;
}

/// Registry holding the secrets listed in the configuration.
#[derive(Debug, Clone, Default)]
pub struct SecretRegistry {
    secrets: HashSet<String>,
}

impl SecretRegistry {
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let secrets = secrets
            .into_iter()
            .map(Into::into)
            .filter(|secret: &String| !secret.is_empty())
            .collect();

        Self { secrets }
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl From<&Devices> for SecretRegistry {
    fn from(devices: &Devices) -> Self {
        Self::new(devices.secrets.iter().cloned())
    }
}

impl DeviceRegistry for SecretRegistry {
    fn is_valid_secret(&self, secret: &str) -> bool {
        self.secrets.contains(secret)
    }
}

pub struct DeviceService {
    registry: Arc<dyn DeviceRegistry>,
}

impl DeviceService {
    pub fn new(registry: Arc<dyn DeviceRegistry>) -> Self {
        Self { registry }
    }

    /// Checks the secret exactly as presented, no trimming or case folding.
    pub fn authorize(&self, secret: &str) -> bool {
        let authorized = self.registry.is_valid_secret(secret);

        tracing::debug!(authorized, "device secret checked");

        authorized
    }
}
