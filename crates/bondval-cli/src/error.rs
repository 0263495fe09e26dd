//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid target price.
    #[error("Invalid price: {0}. Must be a positive number.")]
    InvalidPrice(f64),

    /// A command-line override produced an unusable configuration.
    #[error("Invalid solver settings: {0}")]
    InvalidSettings(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
