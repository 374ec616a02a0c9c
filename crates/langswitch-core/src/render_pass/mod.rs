//! # Render Pass
//!
//! State that lives for exactly one page generation. A [`RenderPass`] is
//! created per request and dropped with it; nothing in it is shared between
//! requests, so concurrent requests each need their own value.
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::kernel::error::Result;
use crate::links::LanguageLinkEntry;
use crate::renderer::assets::AssetQueue;
use crate::renderer::id::RendererId;
use crate::renderer::loader::{RendererLoader, ResolvedRenderer};

/// Per-request cache shared by every widget placement on one page
#[derive(Debug, Default)]
pub struct RenderPass {
    /// Memoized language links
    links: Option<Arc<[LanguageLinkEntry]>>,
    /// Renderers loaded so far, keyed by the requested id
    renderers: HashMap<RendererId, ResolvedRenderer>,
    /// Ids whose assets were already registered
    assets_registered: HashSet<RendererId>,
    assets: AssetQueue,
    draw_calls: u32,
}

impl RenderPass {
    /// Start a new pass
    pub fn new() -> Self {
        Self::default()
    }

    /// The memoized links, computing them with `compute` on first use
    pub fn links_or_insert_with<F>(&mut self, compute: F) -> Arc<[LanguageLinkEntry]>
    where
        F: FnOnce() -> Vec<LanguageLinkEntry>,
    {
        if let Some(links) = &self.links {
            return Arc::clone(links);
        }
        let links: Arc<[LanguageLinkEntry]> = compute().into();
        self.links = Some(Arc::clone(&links));
        links
    }

    /// The memoized links, if already computed in this pass
    pub fn cached_links(&self) -> Option<Arc<[LanguageLinkEntry]>> {
        self.links.clone()
    }

    /// Resolve `id` through `loader` once per pass; later calls return the
    /// same renderer instance
    pub fn load(&mut self, loader: &RendererLoader, id: &RendererId) -> Result<ResolvedRenderer> {
        if let Some(resolved) = self.renderers.get(id) {
            return Ok(resolved.clone());
        }
        let resolved = loader.resolve(id)?;
        self.renderers.insert(id.clone(), resolved.clone());
        Ok(resolved)
    }

    /// Number of distinct ids loaded in this pass
    pub fn loaded_count(&self) -> usize {
        self.renderers.len()
    }

    pub fn has_registered_assets(&self, id: &RendererId) -> bool {
        self.assets_registered.contains(id)
    }

    pub fn mark_assets_registered(&mut self, id: RendererId) {
        self.assets_registered.insert(id);
    }

    pub fn assets(&self) -> &AssetQueue {
        &self.assets
    }

    pub fn assets_mut(&mut self) -> &mut AssetQueue {
        &mut self.assets
    }

    /// Id suffix for the next placement: 0, 1, 2, ... within this pass
    pub fn next_draw_id(&mut self) -> u32 {
        let id = self.draw_calls;
        self.draw_calls += 1;
        id
    }

    /// Number of placements drawn so far
    pub fn draw_count(&self) -> u32 {
        self.draw_calls
    }
}
