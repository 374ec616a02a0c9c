//! # Langswitch Link System Errors
//!
//! Raised when the configured language table cannot be used.

#[derive(Debug, thiserror::Error)]
pub enum LinkSystemError {
    #[error("Language table is empty")]
    EmptyLanguageTable,

    #[error("Default language '{0}' is not in the language table")]
    UnknownDefaultLanguage(String),

    #[error("Language '{0}' is listed more than once")]
    DuplicateLanguage(String),

    #[error("Invalid language code '{code}': {message}")]
    InvalidLanguageCode { code: String, message: String },
}
