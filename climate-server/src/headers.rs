use axum::http::{HeaderName, HeaderValue};
use axum_extra::headers::{self, Header};

static DEVICE_SHARED_SECRET: HeaderName = HeaderName::from_static("x-device-shared-secret");

/// The `x-device-shared-secret` header sent by devices, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSecret(String);

impl DeviceSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Header for DeviceSecret {
    fn name() -> &'static HeaderName {
        &DEVICE_SHARED_SECRET
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let secret = value.to_str().map_err(|_| headers::Error::invalid())?;

        Ok(Self(secret.to_string()))
    }

    fn encode<E>(&self, values: &mut E)
    where
        E: Extend<HeaderValue>,
    {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}
