// Core modules of the language switcher
pub mod kernel;
pub mod links;
pub mod render_pass;
pub mod renderer;
pub mod storage;
pub mod utils;
pub mod widget;

// Re-export key public types/traits for easier use by the binary
pub use kernel::error::Error as KernelError;
pub use kernel::error::Result;
pub use links::{LanguageLinkBuilder, LanguageLinkEntry, LanguageTable};
pub use render_pass::RenderPass;
pub use renderer::{
    ActiveAssetAggregator, AssetQueue, Renderer, RendererCatalog, RendererId, RendererLoader,
};
pub use storage::{StorageRoots, SwitcherConfig};
pub use widget::{WidgetInstanceConfig, WidgetPresenter};

#[cfg(test)]
mod tests;
