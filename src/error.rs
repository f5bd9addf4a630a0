//! Error types for runr

use std::io;
use thiserror::Error;

/// Result type alias for runr operations
pub type Result<T> = std::result::Result<T, RunrError>;

/// Main error type for runr
#[derive(Error, Debug)]
pub enum RunrError {
    /// Configuration-related errors
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Task resolution errors
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Command execution errors
    #[error("{0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No \"{0}\" found")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Subtask descriptions and execution control not supported")]
    NestedControl,
}

/// Task resolution errors
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Task \"{0}\" not found")]
    TaskNotFound(String),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command \"{code}\" has failed")]
    CommandFailed { code: String, status: Option<i32> },

    #[error("Failed to launch \"{code}\": {error}")]
    Spawn { code: String, error: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for resolution operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
