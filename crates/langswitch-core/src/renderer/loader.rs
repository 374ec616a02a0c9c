use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::kernel::constants::{DEFAULT_RENDERER_KIND, HEADER_READ_LIMIT};
use crate::kernel::error::Result;
use crate::renderer::catalog::{discover, RendererCatalog};
use crate::renderer::descriptor::{parse_header, short_name, RendererDescriptor};
use crate::renderer::error::RendererSystemError;
use crate::renderer::id::RendererId;
use crate::renderer::registry::RendererFactoryRegistry;
use crate::renderer::traits::Renderer;
use crate::storage::StorageRoots;
use crate::utils::fs::read_head;

/// Where a resolved renderer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererSource {
    Bundled,
    Override,
    /// The selection could not be used and the default renderer stands in
    Fallback,
}

/// A renderer ready to draw, with the id it was actually loaded from
#[derive(Debug, Clone)]
pub struct ResolvedRenderer {
    /// Id of the file backing the renderer; the default id on fallback
    pub id: RendererId,
    /// File name without directory, prefix or extension
    pub short_name: String,
    pub source: RendererSource,
    pub renderer: Arc<dyn Renderer>,
}

#[derive(Debug, Clone)]
struct Binding {
    kind: String,
}

/// Resolves renderer ids to live renderers.
///
/// At construction the bundled and override catalogs are scanned once and
/// every discovered id is bound to its factory kind. Resolution never fails
/// for a bad selection: anything unusable is replaced by the default
/// renderer. Only a missing default is reported as an error.
#[derive(Debug)]
pub struct RendererLoader {
    roots: StorageRoots,
    factories: RendererFactoryRegistry,
    bundled: RendererCatalog,
    overrides: RendererCatalog,
    bindings: HashMap<RendererId, Binding>,
}

impl RendererLoader {
    /// Create a loader and build its id table from both catalogs
    pub fn new(roots: StorageRoots, factories: RendererFactoryRegistry) -> Self {
        let bundled = discover(roots.bundled.widgets_dir());
        let overrides = discover(roots.overrides.widgets_dir());

        let mut bindings = HashMap::new();
        for descriptor in bundled.iter() {
            bindings.insert(RendererId::Local(descriptor.id.clone()), Self::bind(descriptor));
        }
        for descriptor in overrides.iter() {
            bindings.insert(RendererId::Override(descriptor.id.clone()), Self::bind(descriptor));
        }
        info!(
            "Renderer table built: {} bundled, {} override",
            bundled.len(),
            overrides.len()
        );

        Self {
            roots,
            factories,
            bundled,
            overrides,
            bindings,
        }
    }

    fn bind(descriptor: &RendererDescriptor) -> Binding {
        Binding {
            kind: descriptor.kind().to_string(),
        }
    }

    pub fn roots(&self) -> &StorageRoots {
        &self.roots
    }

    pub fn factories(&self) -> &RendererFactoryRegistry {
        &self.factories
    }

    /// Renderers discovered in the bundled tree at startup
    pub fn bundled_catalog(&self) -> &RendererCatalog {
        &self.bundled
    }

    /// Renderers discovered in override storage at startup
    pub fn override_catalog(&self) -> &RendererCatalog {
        &self.overrides
    }

    /// Resolve `id` to a renderer, falling back to the default renderer when
    /// the selection is empty, missing, outside its root or of an unknown
    /// kind.
    pub fn resolve(&self, id: &RendererId) -> Result<ResolvedRenderer> {
        match self.try_resolve(id) {
            Some(resolved) => {
                debug!("Renderer loaded: {} ({})", id, resolved.short_name);
                Ok(resolved)
            }
            None => {
                if !id.is_empty() {
                    warn!("Renderer '{}' unavailable, using default renderer", id);
                }
                self.resolve_default()
            }
        }
    }

    /// Load the fixed default renderer
    pub fn resolve_default(&self) -> Result<ResolvedRenderer> {
        let id = RendererId::default_renderer();
        let path = self.roots.bundled.widgets_dir().join(id.path());
        if !path.is_file() {
            return Err(RendererSystemError::DefaultRendererMissing {
                path,
                reason: "descriptor file not found".to_string(),
            }
            .into());
        }
        let renderer = self.factories.instantiate(DEFAULT_RENDERER_KIND).ok_or_else(|| {
            RendererSystemError::DefaultRendererMissing {
                path: path.clone(),
                reason: format!("no factory registered for kind '{}'", DEFAULT_RENDERER_KIND),
            }
        })?;

        Ok(ResolvedRenderer {
            short_name: short_name(id.path()).to_string(),
            id,
            source: RendererSource::Fallback,
            renderer,
        })
    }

    fn try_resolve(&self, id: &RendererId) -> Option<ResolvedRenderer> {
        if id.is_empty() {
            return None;
        }
        let path = self.roots.locate(id)?;
        if !path.is_file() {
            debug!("Renderer file {} does not exist", path.display());
            return None;
        }

        let kind = match self.bindings.get(id) {
            Some(binding) => binding.kind.clone(),
            None => Self::kind_from_file(&path, id.path()),
        };
        let Some(renderer) = self.factories.instantiate(&kind) else {
            warn!("No renderer factory for kind '{}' (selected by '{}')", kind, id);
            return None;
        };

        Some(ResolvedRenderer {
            id: id.clone(),
            short_name: short_name(id.path()).to_string(),
            source: if id.is_override() {
                RendererSource::Override
            } else {
                RendererSource::Bundled
            },
            renderer,
        })
    }

    /// Kind of a file that appeared after startup; its header may lack `Name`
    fn kind_from_file(path: &Path, relative: &str) -> String {
        read_head(path, HEADER_READ_LIMIT)
            .ok()
            .and_then(|header| parse_header(&header).remove("Renderer"))
            .filter(|kind| !kind.is_empty())
            .unwrap_or_else(|| short_name(relative).to_string())
    }
}
