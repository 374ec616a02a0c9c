#![cfg(test)]

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::links::{LanguageRecord, LanguageTable, LinkSettings};
use crate::renderer::assets::AssetQueue;
use crate::renderer::traits::{register_sibling_asset, RenderArgs, Renderer};
use crate::renderer::assets::AssetKind;
use crate::storage::{AssetRoot, StorageRoots};

pub const HOME: &str = "https://site.test";
pub const BUNDLED_URL: &str = "https://cdn.test/bundled";
pub const OVERRIDE_URL: &str = "https://site.test/uploads/langswitch";

// ===== FILESYSTEM FIXTURES =====

/// Write `contents` to `path`, creating parent directories
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(path, contents).expect("Failed to write fixture file");
}

/// Descriptor header in the usual comment-block layout
pub fn descriptor_header(name: &str, kind: Option<&str>) -> String {
    let mut header = format!(
        "/*\nName: {}\nDescription: Fixture renderer\nVersion: 1.0\nAuthor: Fixture Author\n",
        name
    );
    if let Some(kind) = kind {
        header.push_str(&format!("Renderer: {}\n", kind));
    }
    header.push_str("*/\n");
    header
}

/// Write a descriptor at `<root>/widgets/<id>`
pub fn write_descriptor(root: &AssetRoot, id: &str, name: &str, kind: Option<&str>) {
    write_file(&root.widgets_dir().join(id), &descriptor_header(name, kind));
}

/// Bundled and override roots below `base`, both empty
pub fn storage_roots(base: &Path) -> StorageRoots {
    StorageRoots::new(
        AssetRoot::new(base.join("bundled"), BUNDLED_URL),
        AssetRoot::new(base.join("uploads"), OVERRIDE_URL),
    )
}

/// Roots holding the bundled renderers (default, dropdown with css and js,
/// flags with css)
pub fn populated_roots(base: &Path) -> StorageRoots {
    let roots = storage_roots(base);
    write_descriptor(&roots.bundled, "default/tpw_default.widget", "Default List", None);
    write_descriptor(&roots.bundled, "dropdown/tpw_dropdown.widget", "Dropdown", None);
    write_file(&roots.bundled.widgets_dir().join("dropdown/tpw_dropdown.css"), ".tr_dropdown {}");
    write_file(&roots.bundled.widgets_dir().join("dropdown/tpw_dropdown.js"), "void 0;");
    write_descriptor(&roots.bundled, "flags/tpw_flags.widget", "Flags", None);
    write_file(&roots.bundled.widgets_dir().join("flags/tpw_flags.css"), ".tr_flags {}");
    roots
}

// ===== LANGUAGE FIXTURES =====

/// `en` (default) and `fr`, both active
pub fn en_fr_table() -> LanguageTable {
    LanguageTable::new(
        "en",
        vec![
            LanguageRecord::new("en", "English", "English", "us", true),
            LanguageRecord::new("fr", "French", "Français", "fr", true),
        ],
    )
    .expect("Fixture language table is valid")
}

pub fn settings(target: &str, permalinks: bool) -> LinkSettings {
    LinkSettings {
        home_url: HOME.to_string(),
        target_language: target.to_string(),
        enable_url_translate: false,
        enable_permalinks_rewrite: permalinks,
        edit_mode: false,
    }
}

// ===== MOCK RENDERERS =====

/// Renderer that counts how often its asset hooks run
#[derive(Debug, Clone)]
pub struct CountingRenderer {
    pub css_calls: Arc<AtomicUsize>,
    pub js_calls: Arc<AtomicUsize>,
}

impl CountingRenderer {
    pub fn new() -> Self {
        Self {
            css_calls: Arc::new(AtomicUsize::new(0)),
            js_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Renderer for CountingRenderer {
    fn name(&self) -> &str {
        "counting"
    }

    fn render(&self, args: &RenderArgs<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "<counting draw=\"{}\" entries=\"{}\"/>", args.draw_id, args.entries.len())
    }

    fn provide_css(&self, raw_id: &str, root: &AssetRoot, queue: &mut AssetQueue) -> bool {
        self.css_calls.fetch_add(1, Ordering::SeqCst);
        register_sibling_asset(AssetKind::Stylesheet, raw_id, root, queue)
    }

    fn provide_js(&self, raw_id: &str, root: &AssetRoot, queue: &mut AssetQueue) -> bool {
        self.js_calls.fetch_add(1, Ordering::SeqCst);
        register_sibling_asset(AssetKind::Script, raw_id, root, queue)
    }
}
