pub mod config;
pub mod error;
pub mod roots;

/// Re-export key types
pub use config::{ConfigFormat, StorageSection, SwitcherConfig, WidgetEntry};
pub use roots::{AssetRoot, StorageRoots};

// Test module declaration
#[cfg(test)]
mod tests;
