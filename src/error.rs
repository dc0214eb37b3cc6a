//! Error types for facade construction and configuration loading.
//!
//! None of these ever reach a logging call. They are only returned by the explicit
//! construction and configuration APIs.

use std::path::PathBuf;
use thiserror::Error;

/// Unified facade error type.
#[derive(Debug, Error)]
pub enum FacadeError {
    /// Logger name is empty or contains whitespace/control characters.
    #[error("Invalid logger name: {0:?}")]
    InvalidName(String),

    /// The process-wide instance has already been constructed.
    #[error("Logger has already been initialized")]
    AlreadyInitialized,

    /// Configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration content is not valid TOML for [`FacadeConfig`](crate::config::FacadeConfig).
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
