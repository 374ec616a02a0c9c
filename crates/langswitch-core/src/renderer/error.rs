//! # Langswitch Renderer System Errors
//!
//! Almost every renderer problem is absorbed by falling back to the default
//! renderer. The variants here cover what cannot be absorbed.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RendererSystemError {
    #[error("Default renderer unavailable at '{path}': {reason}")]
    DefaultRendererMissing { path: PathBuf, reason: String },

    #[error("Renderer factory already registered for kind '{kind}'")]
    DuplicateFactory { kind: String },

    #[error("Invalid renderer kind '{kind}': {message}")]
    InvalidKind { kind: String, message: String },
}
