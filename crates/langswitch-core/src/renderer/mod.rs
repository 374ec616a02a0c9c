//! # Langswitch Renderer System
//!
//! Everything between a renderer file on disk and a live [`Renderer`]
//! instance that can draw the language switcher.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`id`]**: [`RendererId`], the persisted selection. Its storage tag picks
//!   the bundled tree or the user-writable override tree.
//! - **[`descriptor`]**: [`RendererDescriptor`] and the header reader that
//!   extracts `Name` and friends from a descriptor file without running it.
//! - **[`catalog`]**: read-only discovery of every descriptor below a root,
//!   ordered for display ([`RendererCatalog`]).
//! - **[`traits`]**: the [`Renderer`] contract and the [`RenderArgs`] parameter
//!   object passed to `render`.
//! - **[`registry`]**: [`RendererFactoryRegistry`], the startup table mapping a
//!   renderer kind to the factory that builds it.
//! - **[`loader`]**: [`RendererLoader`], which resolves ids to renderers and
//!   guarantees a fallback.
//! - **[`assets`]**: [`AssetQueue`] and the [`ActiveAssetAggregator`] that
//!   registers each active renderer's stylesheet and script once per pass.
//! - **[`builtin`]**: the renderers compiled into this crate.
//! - **[`error`]**: [`RendererSystemError`](error::RendererSystemError).
pub mod assets;
pub mod builtin;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod id;
pub mod loader;
pub mod registry;
pub mod traits;

pub use assets::{ActiveAssetAggregator, AssetKind, AssetQueue, AssetRegistration};
pub use catalog::{discover, RendererCatalog};
pub use descriptor::RendererDescriptor;
pub use id::RendererId;
pub use loader::{RendererLoader, RendererSource, ResolvedRenderer};
pub use registry::{RendererFactory, RendererFactoryRegistry};
pub use traits::{RenderArgs, Renderer};

// Test module declaration
#[cfg(test)]
mod tests;
