//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Criteria cap must be at least 2")]
    InvalidCriteriaCap,

    #[error("Solution cap must be at least 2")]
    InvalidSolutionCap,

    #[error("PDF timeout must be between 1 and 300 seconds")]
    InvalidPdfTimeout,

    #[error("Results title must not be empty")]
    EmptyResultsTitle,

    #[error("Log level filter must not be empty")]
    EmptyLogLevel,
}
