use std::path::{Component, Path, PathBuf};

use crate::kernel::constants::WIDGETS_DIR;
use crate::renderer::id::RendererId;

/// A storage area on disk together with the public URL it is served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    pub dir: PathBuf,
    pub url: String,
}

impl AssetRoot {
    pub fn new(dir: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url: url.into(),
        }
    }

    /// Directory holding renderer descriptors
    pub fn widgets_dir(&self) -> PathBuf {
        self.dir.join(WIDGETS_DIR)
    }

    /// Public URL of a path relative to this root
    pub fn url_for(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }
}

/// The bundled renderer tree and the user-writable override area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoots {
    pub bundled: AssetRoot,
    pub overrides: AssetRoot,
}

impl StorageRoots {
    pub fn new(bundled: AssetRoot, overrides: AssetRoot) -> Self {
        Self { bundled, overrides }
    }

    /// Root that applies to `id`, chosen by its storage tag only
    pub fn for_id(&self, id: &RendererId) -> &AssetRoot {
        if id.is_override() {
            &self.overrides
        } else {
            &self.bundled
        }
    }

    /// Absolute location of the renderer file for `id`.
    ///
    /// `None` when the id is empty or would leave its widget directory.
    pub fn locate(&self, id: &RendererId) -> Option<PathBuf> {
        let relative = Path::new(id.path());
        if id.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            return None;
        }
        Some(self.for_id(id).widgets_dir().join(relative))
    }
}
