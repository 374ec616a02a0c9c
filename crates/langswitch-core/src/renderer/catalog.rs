use std::path::Path;

use log::debug;

use crate::renderer::descriptor::{is_descriptor_file_name, RendererDescriptor};
use crate::utils::fs::find_files_shallow;
use crate::utils::natural::natural_cmp_ignore_case;

/// Ordered inventory of the renderers available below one widget directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RendererCatalog {
    entries: Vec<RendererDescriptor>,
}

impl RendererCatalog {
    /// Scan `widgets_dir`; see [`discover`]
    pub fn discover<P: AsRef<Path>>(widgets_dir: P) -> Self {
        discover(widgets_dir)
    }

    pub fn get(&self, id: &str) -> Option<&RendererDescriptor> {
        self.entries.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RendererDescriptor> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for RendererCatalog {
    type Item = RendererDescriptor;
    type IntoIter = std::vec::IntoIter<RendererDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Scan `widgets_dir` and its immediate subdirectories for renderer
/// descriptors.
///
/// Only `tpw_*.widget` files are considered, and only those whose header
/// carries a non-empty `Name`. The result is ordered by a case-insensitive
/// natural comparison of the names. A missing directory or unreadable file
/// never fails the scan; it just contributes nothing.
pub fn discover<P: AsRef<Path>>(widgets_dir: P) -> RendererCatalog {
    let widgets_dir = widgets_dir.as_ref();
    let candidates = match find_files_shallow(widgets_dir, &is_descriptor_file_name) {
        Ok(candidates) => candidates,
        Err(e) => {
            debug!("No renderer catalog at {}: {}", widgets_dir.display(), e);
            return RendererCatalog::default();
        }
    };

    let mut entries: Vec<RendererDescriptor> = candidates
        .iter()
        .filter_map(|id| RendererDescriptor::read(widgets_dir, id))
        .collect();

    entries.sort_by(|a, b| natural_cmp_ignore_case(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
    debug!("Discovered {} renderer(s) in {}", entries.len(), widgets_dir.display());

    RendererCatalog { entries }
}
