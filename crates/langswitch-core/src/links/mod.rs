//! # Langswitch Link System
//!
//! Computes the language navigation targets shown by every switcher on a page.
//!
//! - **[`language`]**: the ordered [`LanguageTable`] the site is configured with.
//! - **[`capability`]**: the [`UrlTranslator`] and [`UrlRewriter`] seams, with
//!   the default [`DictionaryTranslator`] and [`LangParamRewriter`].
//! - **[`builder`]**: [`LanguageLinkBuilder`], which derives one
//!   [`LanguageLinkEntry`] per listed language, once per render pass.
pub mod builder;
pub mod capability;
pub mod error;
pub mod language;

pub use builder::{LanguageLinkBuilder, LanguageLinkEntry, LinkSettings};
pub use capability::{
    DictionaryTranslator, IdentityTranslator, LangParamRewriter, UrlRewriter, UrlTranslator,
};
pub use error::LinkSystemError;
pub use language::{LanguageRecord, LanguageTable};

// Test module declaration
#[cfg(test)]
mod tests;
