//! Configuration errors
//!
//! The simulation itself never fails; a bad tick is a reset. Only loading
//! and validating tuning constants can go wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: &'static str,
    },
}
