use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::kernel::error::Result;
use crate::links::error::LinkSystemError;

/// One configured language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    /// ISO code used in URLs, e.g. `fr` or `zh-tw`
    pub code: String,

    /// Name in the site's language
    pub label: String,

    /// Name in the language itself; the label is used when empty
    #[serde(default)]
    pub native_label: String,

    /// Flag identifier, usually a country code
    #[serde(default)]
    pub flag: String,

    /// Whether the language is offered to visitors
    #[serde(default)]
    pub active: bool,
}

impl LanguageRecord {
    pub fn new(code: &str, label: &str, native_label: &str, flag: &str, active: bool) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            native_label: native_label.to_string(),
            flag: flag.to_string(),
            active,
        }
    }

    pub fn display_native_label(&self) -> &str {
        if self.native_label.is_empty() {
            &self.label
        } else {
            &self.native_label
        }
    }
}

/// The site's languages in display order, plus which one is the default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    default_language: String,
    languages: Vec<LanguageRecord>,
}

impl LanguageTable {
    /// Build a table, rejecting empty tables, duplicate or malformed codes and
    /// a default language that is not listed
    pub fn new(default_language: &str, languages: Vec<LanguageRecord>) -> Result<Self> {
        if languages.is_empty() {
            return Err(LinkSystemError::EmptyLanguageTable.into());
        }

        let mut seen = HashSet::new();
        for record in &languages {
            validate_code(&record.code)?;
            if !seen.insert(record.code.as_str()) {
                return Err(LinkSystemError::DuplicateLanguage(record.code.clone()).into());
            }
        }
        if !seen.contains(default_language) {
            let code = default_language.to_string();
            return Err(LinkSystemError::UnknownDefaultLanguage(code).into());
        }

        Ok(Self {
            default_language: default_language.to_string(),
            languages,
        })
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn get(&self, code: &str) -> Option<&LanguageRecord> {
        self.languages.iter().find(|l| l.code == code)
    }

    pub fn is_default(&self, code: &str) -> bool {
        self.default_language == code
    }

    pub fn is_active(&self, code: &str) -> bool {
        self.get(code).is_some_and(|l| l.active)
    }

    /// Languages that appear in the switcher: active ones and the default
    pub fn listed(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.languages
            .iter()
            .filter(|l| l.active || l.code == self.default_language)
    }

    pub fn codes(&self) -> Vec<&str> {
        self.languages.iter().map(|l| l.code.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageRecord> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Toggle whether `code` is offered; returns false for unknown codes
    pub fn set_active(&mut self, code: &str, active: bool) -> bool {
        match self.languages.iter_mut().find(|l| l.code == code) {
            Some(record) => {
                record.active = active;
                true
            }
            None => false,
        }
    }
}

fn validate_code(code: &str) -> Result<()> {
    let valid = !code.is_empty()
        && code.len() <= 16
        && code.starts_with(|c: char| c.is_ascii_alphabetic())
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(LinkSystemError::InvalidLanguageCode {
            code: code.to_string(),
            message: "expected letters, digits, '-' or '_' starting with a letter".to_string(),
        }
        .into())
    }
}
