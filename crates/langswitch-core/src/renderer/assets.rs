use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::kernel::error::Result;
use crate::render_pass::RenderPass;
use crate::renderer::id::RendererId;
use crate::renderer::loader::RendererLoader;
use crate::widget::WidgetInstanceConfig;

/// Kind of asset a renderer can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    /// File extension of sibling files of this kind
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKind::Stylesheet => "css",
            AssetKind::Script => "js",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Stylesheet => write!(f, "css"),
            AssetKind::Script => write!(f, "js"),
        }
    }
}

/// One asset the page should load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRegistration {
    pub kind: AssetKind,
    /// Unique handle the page uses to refer to the asset
    pub handle: String,
    /// Public URL of the file
    pub url: String,
    pub version: String,
}

/// Assets registered during one render pass, in registration order.
///
/// Emitting them into the page is up to the host.
#[derive(Debug, Clone, Default)]
pub struct AssetQueue {
    items: Vec<AssetRegistration>,
}

impl AssetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `registration` unless an asset of the same kind and handle is
    /// already queued. Returns whether it was added.
    pub fn push(&mut self, registration: AssetRegistration) -> bool {
        let duplicate = self
            .items
            .iter()
            .any(|r| r.kind == registration.kind && r.handle == registration.handle);
        if duplicate {
            return false;
        }
        debug!(
            "Registered {} '{}' -> {}",
            registration.kind, registration.handle, registration.url
        );
        self.items.push(registration);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetRegistration> {
        self.items.iter()
    }

    pub fn stylesheets(&self) -> impl Iterator<Item = &AssetRegistration> {
        self.items.iter().filter(|r| r.kind == AssetKind::Stylesheet)
    }

    pub fn scripts(&self) -> impl Iterator<Item = &AssetRegistration> {
        self.items.iter().filter(|r| r.kind == AssetKind::Script)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Registers the assets of every renderer used by an active placement.
///
/// Must run before the page emits its asset list.
#[derive(Debug, Clone, Copy)]
pub struct ActiveAssetAggregator<'a> {
    loader: &'a RendererLoader,
}

impl<'a> ActiveAssetAggregator<'a> {
    pub fn new(loader: &'a RendererLoader) -> Self {
        Self { loader }
    }

    /// Register the stylesheet and script of each distinct renderer among the
    /// active instances.
    ///
    /// Each renderer's `provide_css`/`provide_js` runs at most once per pass,
    /// however many placements share it and however often this is called.
    /// Returns the number of renderers whose assets were registered by this
    /// call.
    pub fn collect_and_register<'i, K, I, F>(
        &self,
        pass: &mut RenderPass,
        instances: I,
        is_active: F,
    ) -> Result<usize>
    where
        K: ?Sized + 'i,
        I: IntoIterator<Item = (&'i K, &'i WidgetInstanceConfig)>,
        F: Fn(&K) -> bool,
    {
        let mut seen: HashSet<&RendererId> = HashSet::new();
        let mut distinct: Vec<&RendererId> = Vec::new();
        for (key, config) in instances {
            if is_active(key) && seen.insert(&config.renderer) {
                distinct.push(&config.renderer);
            }
        }

        let mut registered = 0;
        for id in distinct {
            if pass.has_registered_assets(id) {
                continue;
            }
            let resolved = pass.load(self.loader, id)?;
            if resolved.id != *id && pass.has_registered_assets(&resolved.id) {
                // Another selection already fell back to the same renderer
                pass.mark_assets_registered(id.clone());
                continue;
            }

            let root = self.loader.roots().for_id(&resolved.id);
            let raw_id = resolved.id.path();
            resolved.renderer.provide_css(raw_id, root, pass.assets_mut());
            resolved.renderer.provide_js(raw_id, root, pass.assets_mut());

            pass.mark_assets_registered(id.clone());
            pass.mark_assets_registered(resolved.id.clone());
            registered += 1;
        }

        debug!("Registered assets for {} renderer(s)", registered);
        Ok(registered)
    }
}
