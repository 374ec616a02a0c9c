//! # Langswitch Core Kernel Errors
//!
//! This module includes [`Error`], the aggregate enum returned across the
//! public API. Each subsystem defines its own typed error and converts into
//! this one through `#[from]`.
use std::path::PathBuf;
use std::result::Result as StdResult;

use crate::links::error::LinkSystemError;
use crate::renderer::error::RendererSystemError;
use crate::storage::error::StorageSystemError;
use thiserror::Error as ThisError;

/// Custom error type for the language switcher core
#[derive(Debug, ThisError)]
pub enum Error {
    /// Renderer discovery, loading or fallback failure
    #[error("Renderer system error: {0}")]
    RendererSystem(#[from] RendererSystemError),

    /// Configuration and filesystem failure
    #[error("Storage system error: {0}")]
    StorageSystem(#[from] StorageSystemError),

    /// Language table or URL capability failure
    #[error("Link system error: {0}")]
    LinkSystem(#[from] LinkSystemError),

    /// Markup could not be written to the output sink
    #[error("Failed to write markup: {0}")]
    Format(#[from] std::fmt::Error),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

// Helper to create an I/O error with context
impl Error {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        Error::StorageSystem(StorageSystemError::io(source, operation, path))
    }

    /// True when this error means the fallback renderer itself is unusable
    pub fn is_fatal_configuration(&self) -> bool {
        matches!(
            self,
            Error::RendererSystem(RendererSystemError::DefaultRendererMissing { .. })
        )
    }
}
