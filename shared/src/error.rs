//! Error types for the ubinan calculator core
//!
//! Numeric input never produces an error: malformed amounts parse to zero.
//! These variants only cover names and documents handed over by the host.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Unknown result metric: {0}")]
    UnknownMetric(String),

    #[error("Unknown weight unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown input field: {0}")]
    UnknownField(String),
}

/// Result type alias for the calculator core
pub type CalculatorResult<T> = Result<T, CalculatorError>;
