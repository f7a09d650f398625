//! Error handling for the CLI and configuration layers
//!
//! The calculation core never fails. Everything around it (reading input
//! files, loading configuration) reports failures through these types and
//! the anyhow-based Result alias for context chaining.

use thiserror::Error;

/// Error types for the outer layers of the estimator
#[derive(Error, Debug)]
pub enum RoiError {
    #[error("config error: {0}")]
    ConfigError(String),

    #[error("input error: {0}")]
    InputError(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible operations
pub type Result<T> = anyhow::Result<T>;
