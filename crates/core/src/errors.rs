//! Core error types for the pricing engine.
//!
//! Pricing itself is total - `localize` never fails - so these errors
//! only surface while loading configuration at process start.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pricing crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}
