//! Shared utilities: configuration and error types.

pub mod config;
pub mod errors;

pub use config::RegistryConfig;
pub use errors::{ConformanceError, RegistryError};
