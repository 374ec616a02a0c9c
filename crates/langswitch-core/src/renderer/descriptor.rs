use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::kernel::constants::{HEADER_READ_LIMIT, WIDGET_EXTENSION, WIDGET_PREFIX};
use crate::utils::fs::read_head;

/// Header keys with a meaning of their own, in their canonical spelling.
/// Other keys are kept as written.
pub const HEADER_KEYS: &[&str] = &[
    "Name",
    "Description",
    "Version",
    "Author",
    "Renderer",
    "License",
    "Website",
];

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t/*#@]*([A-Za-z][\w-]*):(.*)$").expect("header pattern is a valid regex")
});

/// Describes one renderer found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererDescriptor {
    /// Path relative to the widget directory, e.g. `flags/tpw_flags.widget`
    pub id: String,

    /// Human-readable name shown in the style picker
    pub name: String,

    /// Remaining header fields keyed by canonical name
    pub metadata: BTreeMap<String, String>,
}

impl RendererDescriptor {
    /// Build a descriptor from header text; `None` when `Name` is absent or blank
    pub fn from_header(id: &str, header: &str) -> Option<Self> {
        let mut fields = parse_header(header);
        let name = fields.remove("Name").filter(|n| !n.is_empty())?;
        Some(Self {
            id: id.to_string(),
            name,
            metadata: fields,
        })
    }

    /// Read the header of `widgets_dir/id` and build a descriptor from it
    pub fn read(widgets_dir: &Path, id: &str) -> Option<Self> {
        let path = widgets_dir.join(id);
        match read_head(&path, HEADER_READ_LIMIT) {
            Ok(header) => Self::from_header(id, &header),
            Err(e) => {
                debug!("Skipping unreadable renderer descriptor {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.get("Description").map(String::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.metadata.get("Version").map(String::as_str)
    }

    pub fn author(&self) -> Option<&str> {
        self.metadata.get("Author").map(String::as_str)
    }

    /// Factory kind: the `Renderer` header when present, else the short name
    pub fn kind(&self) -> &str {
        self.metadata
            .get("Renderer")
            .map(String::as_str)
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| short_name(&self.id))
    }

    pub fn short_name(&self) -> &str {
        short_name(&self.id)
    }
}

/// Extract `Key: value` header fields. Keys listed in [`HEADER_KEYS`] match
/// case-insensitively and are stored in canonical spelling. The first
/// occurrence of each key wins; a trailing comment terminator is dropped from
/// the value.
pub fn parse_header(header: &str) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    for caps in HEADER_LINE.captures_iter(header) {
        let raw_key = &caps[1];
        let key = HEADER_KEYS
            .iter()
            .find(|k| k.eq_ignore_ascii_case(raw_key))
            .copied()
            .unwrap_or(raw_key);
        let value = caps[2].trim();
        let value = value.strip_suffix("*/").unwrap_or(value).trim();
        fields.entry(key.to_string()).or_insert_with(|| value.to_string());
    }
    fields
}

/// True when `file_name` follows the `tpw_<name>.widget` convention
pub fn is_descriptor_file_name(file_name: &str) -> bool {
    file_name.len() > WIDGET_PREFIX.len() + WIDGET_EXTENSION.len() + 1
        && file_name.starts_with(WIDGET_PREFIX)
        && file_name
            .strip_suffix(WIDGET_EXTENSION)
            .is_some_and(|rest| rest.ends_with('.'))
}

/// Canonical short name: the file name without directory, prefix or extension.
///
/// `flags/tpw_flags.widget` becomes `flags`.
pub fn short_name(id: &str) -> &str {
    let file_name = id.rsplit('/').next().unwrap_or(id);
    let stem = file_name
        .strip_suffix(WIDGET_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(file_name);
    stem.strip_prefix(WIDGET_PREFIX).unwrap_or(stem)
}

/// The id without its descriptor extension; sibling assets share this base
pub fn base_path(id: &str) -> &str {
    id.strip_suffix(WIDGET_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(id)
}
