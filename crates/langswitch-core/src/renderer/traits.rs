use std::fmt;

use crate::kernel::constants::{ASSET_VERSION, WIDGETS_DIR};
use crate::links::LanguageLinkEntry;
use crate::renderer::assets::{AssetKind, AssetQueue, AssetRegistration};
use crate::renderer::descriptor::base_path;
use crate::storage::AssetRoot;

/// Everything a renderer needs to draw one placement
#[derive(Debug, Clone, Copy)]
pub struct RenderArgs<'a> {
    /// Language links in display order; URLs are already escaped
    pub entries: &'a [LanguageLinkEntry],

    /// Language the page is currently shown in
    pub target_language: &'a str,

    /// Number unique to this placement within the render pass, for element ids
    pub draw_id: u32,
}

impl RenderArgs<'_> {
    /// The entry for the language being displayed, if it is listed
    pub fn active_entry(&self) -> Option<&LanguageLinkEntry> {
        self.entries.iter().find(|e| e.active)
    }
}

/// Contract implemented by every language switcher style
pub trait Renderer: Send + Sync + fmt::Debug {
    /// Canonical short name of this renderer
    fn name(&self) -> &str;

    /// Write the switcher markup for `args` into `out`
    fn render(&self, args: &RenderArgs<'_>, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Queue the renderer's stylesheet if a sibling `.css` file exists.
    ///
    /// `raw_id` is the renderer path relative to the widget directory of
    /// `root`. Returns whether anything was queued.
    fn provide_css(&self, raw_id: &str, root: &AssetRoot, queue: &mut AssetQueue) -> bool {
        register_sibling_asset(AssetKind::Stylesheet, raw_id, root, queue)
    }

    /// Queue the renderer's script if a sibling `.js` file exists
    fn provide_js(&self, raw_id: &str, root: &AssetRoot, queue: &mut AssetQueue) -> bool {
        register_sibling_asset(AssetKind::Script, raw_id, root, queue)
    }
}

/// Queue `<widgets>/<base>.<ext>` from `root` when the file exists on disk
pub fn register_sibling_asset(
    kind: AssetKind,
    raw_id: &str,
    root: &AssetRoot,
    queue: &mut AssetQueue,
) -> bool {
    let base = base_path(raw_id);
    let relative = format!("{}/{}.{}", WIDGETS_DIR, base, kind.extension());
    let file = root.dir.join(&relative);
    log::debug!("Looking for {}: {}", kind, file.display());

    if !file.is_file() {
        return false;
    }

    let mut handle = base.replace('/', "_");
    if kind == AssetKind::Script {
        handle.push_str("_js");
    }
    queue.push(AssetRegistration {
        kind,
        handle,
        url: root.url_for(&relative),
        version: ASSET_VERSION.to_string(),
    })
}
