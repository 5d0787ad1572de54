//! Custom error types for the common library
//!
//! This module defines the errors raised by repositories and by the
//! configuration loader.

use thiserror::Error;
use uuid::Uuid;

/// Custom error type for repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record exists for the given identifier
    #[error("Record {0} not found")]
    NotFound(Uuid),
}

/// Type alias for Result with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Load(#[from] ::config::ConfigError),
}
