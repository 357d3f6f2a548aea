//! Error types for engine configuration
//!
//! Layout computation itself is infallible; only loading and validating
//! configuration can fail.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while building an engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
