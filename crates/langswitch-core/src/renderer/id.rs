use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::kernel::constants::DEFAULT_RENDERER_ID;

/// Identifies a renderer by its location relative to a storage root.
///
/// The persisted form is the relative path for bundled renderers and the
/// path prefixed with [`RendererId::OVERRIDE_MARKER`] for renderers kept in
/// override storage. `local:` and `override:` prefixes are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RendererId {
    /// Renderer shipped in the bundled tree
    Local(String),
    /// Renderer placed by the operator in override storage
    Override(String),
}

impl RendererId {
    /// Marker prefix of override ids in their persisted form
    pub const OVERRIDE_MARKER: char = '*';

    /// Parse a persisted selection. Never fails; an empty string yields an
    /// empty local id, which resolves to the fallback renderer.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(path) = raw.strip_prefix(Self::OVERRIDE_MARKER) {
            RendererId::Override(path.to_string())
        } else if let Some(path) = raw.strip_prefix("override:") {
            RendererId::Override(path.to_string())
        } else if let Some(path) = raw.strip_prefix("local:") {
            RendererId::Local(path.to_string())
        } else {
            RendererId::Local(raw.to_string())
        }
    }

    /// The fixed fallback renderer
    pub fn default_renderer() -> Self {
        RendererId::Local(DEFAULT_RENDERER_ID.to_string())
    }

    /// Path relative to the storage root's widget directory
    pub fn path(&self) -> &str {
        match self {
            RendererId::Local(path) | RendererId::Override(path) => path,
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, RendererId::Override(_))
    }

    pub fn is_empty(&self) -> bool {
        self.path().is_empty()
    }

    /// The string stored in widget settings for this id
    pub fn persisted(&self) -> String {
        match self {
            RendererId::Local(path) => path.clone(),
            RendererId::Override(path) => format!("{}{}", Self::OVERRIDE_MARKER, path),
        }
    }
}

impl Default for RendererId {
    fn default() -> Self {
        RendererId::Local(String::new())
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.persisted())
    }
}

impl FromStr for RendererId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RendererId::parse(s))
    }
}

impl From<String> for RendererId {
    fn from(raw: String) -> Self {
        RendererId::parse(&raw)
    }
}

impl From<&str> for RendererId {
    fn from(raw: &str) -> Self {
        RendererId::parse(raw)
    }
}

impl From<RendererId> for String {
    fn from(id: RendererId) -> Self {
        id.persisted()
    }
}
