pub mod models;
pub mod version;

pub use version::VersionValidator;
