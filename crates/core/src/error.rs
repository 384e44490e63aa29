//! Defines the error types for configuration and page wiring.

use thiserror::Error;

/// A configuration value that cannot drive the page behaviours.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidMeasure { field: &'static str, value: f64 },
    #[error("stats.tickMs must be greater than zero")]
    ZeroTick,
    #[error("stats.durationMs ({duration}) must be at least one tick ({tick})")]
    DurationShorterThanTick { duration: u32, tick: u32 },
    #[error("selector '{0}' is empty but its feature is enabled")]
    EmptySelector(&'static str),
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
}

/// The main error enum for page-level operations.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Markup error: {0}")]
    Markup(String),
}
