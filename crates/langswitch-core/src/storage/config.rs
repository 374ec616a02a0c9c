use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::kernel::error::{Error, Result};
use crate::links::{
    DictionaryTranslator, LangParamRewriter, LanguageRecord, LanguageTable, LinkSettings,
};
use crate::storage::error::StorageSystemError;
use crate::storage::roots::{AssetRoot, StorageRoots};
use crate::widget::WidgetInstanceConfig;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Where renderers live on disk and where they are served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Bundled renderer tree (contains `widgets/`)
    pub bundled_dir: PathBuf,
    pub bundled_url: String,
    /// User-writable override area (contains `widgets/`)
    pub override_dir: PathBuf,
    pub override_url: String,
}

/// A widget placement as listed in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetEntry {
    /// Host-assigned instance key, unique per configuration
    pub key: String,
    #[serde(flatten)]
    pub config: WidgetInstanceConfig,
    /// Whether the placement is shown on pages
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Site configuration of the language switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitcherConfig {
    pub home_url: String,
    pub default_language: String,
    #[serde(default)]
    pub enable_url_translate: bool,
    #[serde(default)]
    pub enable_permalinks_rewrite: bool,
    #[serde(default)]
    pub widget_allow_set_default_language: bool,
    /// Endpoint storing the visitor's default-language preference
    #[serde(default)]
    pub preference_endpoint: String,
    pub storage: StorageSection,
    pub languages: Vec<LanguageRecord>,
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,
    /// Path segment translations: language code -> original -> translated
    #[serde(default)]
    pub url_translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl SwitcherConfig {
    /// Load and validate a configuration file. Relative storage directories
    /// are resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            StorageSystemError::UnsupportedConfigFormat(path.display().to_string())
        })?;
        let data = fs::read_to_string(path)
            .map_err(|e| Error::io(e, "read_config", path.to_path_buf()))?;

        let mut config = Self::parse(&data, format)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_dirs(base);
        }
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Deserialize from string based on format, without validation
    pub fn parse(data: &str, format: ConfigFormat) -> Result<Self> {
        let parsed = match format {
            ConfigFormat::Json => {
                serde_json::from_str(data).map_err(|e| deserialization_error("json", e))
            }
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => {
                serde_yaml::from_str(data).map_err(|e| deserialization_error("yaml", e))
            }
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => {
                toml::from_str(data).map_err(|e| deserialization_error("toml", e))
            }
        };
        Ok(parsed?)
    }

    /// Check the language table and widget keys
    pub fn validate(&self) -> Result<()> {
        self.language_table()?;

        let mut keys = HashSet::new();
        for widget in &self.widgets {
            if !keys.insert(widget.key.as_str()) {
                return Err(StorageSystemError::InvalidConfig(format!(
                    "widget key '{}' is used more than once",
                    widget.key
                ))
                .into());
            }
        }
        Ok(())
    }

    fn resolve_relative_dirs(&mut self, base: &Path) {
        if self.storage.bundled_dir.is_relative() {
            self.storage.bundled_dir = base.join(&self.storage.bundled_dir);
        }
        if self.storage.override_dir.is_relative() {
            self.storage.override_dir = base.join(&self.storage.override_dir);
        }
    }

    pub fn language_table(&self) -> Result<LanguageTable> {
        LanguageTable::new(&self.default_language, self.languages.clone())
    }

    pub fn storage_roots(&self) -> StorageRoots {
        StorageRoots::new(
            AssetRoot::new(&self.storage.bundled_dir, &self.storage.bundled_url),
            AssetRoot::new(&self.storage.override_dir, &self.storage.override_url),
        )
    }

    /// Link settings for a page shown in `target_language`
    pub fn link_settings(&self, target_language: &str, edit_mode: bool) -> LinkSettings {
        LinkSettings {
            home_url: self.home_url.clone(),
            target_language: target_language.to_string(),
            enable_url_translate: self.enable_url_translate,
            enable_permalinks_rewrite: self.enable_permalinks_rewrite,
            edit_mode,
        }
    }

    pub fn translator(&self) -> DictionaryTranslator {
        DictionaryTranslator::from_dictionaries(&self.url_translations)
    }

    pub fn rewriter(&self) -> LangParamRewriter {
        LangParamRewriter::new(self.languages.iter().map(|l| l.code.clone()))
    }

    pub fn widget(&self, key: &str) -> Option<&WidgetEntry> {
        self.widgets.iter().find(|w| w.key == key)
    }

    pub fn is_widget_active(&self, key: &str) -> bool {
        self.widget(key).is_some_and(|w| w.active)
    }
}

fn deserialization_error<E>(format: &str, source: E) -> StorageSystemError
where
    E: std::error::Error + Send + Sync + 'static,
{
    StorageSystemError::DeserializationError {
        format: format.to_string(),
        source: Box::new(source),
    }
}
