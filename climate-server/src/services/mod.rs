mod alert_service;
mod device_service;
mod reading_service;

pub use alert_service::*;
pub use device_service::*;
pub use reading_service::*;
