//! Error types shared across the crate

use thiserror::Error;

/// Errors that can occur while configuring or driving the pointer pipeline
#[derive(Error, Debug)]
pub enum PointerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Sensor source unavailable: {0}")]
    SourceUnavailable(String),
}

/// Result type for pointer pipeline operations
pub type PointerResult<T> = Result<T, PointerError>;
