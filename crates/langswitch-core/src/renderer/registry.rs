use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::kernel::error::Result;
use crate::renderer::builtin::{DefaultRenderer, DropdownRenderer, FlagsRenderer};
use crate::renderer::error::RendererSystemError;
use crate::renderer::traits::Renderer;

/// Builds a fresh renderer instance
pub type RendererFactory = Arc<dyn Fn() -> Arc<dyn Renderer> + Send + Sync>;

/// Table of renderer kinds known to this process.
///
/// A descriptor on disk names its kind; the loader looks the kind up here to
/// obtain an instance. The table is filled once at startup and read-only
/// afterwards.
#[derive(Clone, Default)]
pub struct RendererFactoryRegistry {
    factories: HashMap<String, RendererFactory>,
}

impl RendererFactoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every renderer compiled into this crate
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert_builtin(DefaultRenderer::KIND, || {
            Arc::new(DefaultRenderer) as Arc<dyn Renderer>
        });
        registry.insert_builtin(DropdownRenderer::KIND, || {
            Arc::new(DropdownRenderer) as Arc<dyn Renderer>
        });
        registry.insert_builtin(FlagsRenderer::KIND, || {
            Arc::new(FlagsRenderer) as Arc<dyn Renderer>
        });
        registry
    }

    fn insert_builtin<F>(&mut self, kind: &str, factory: F)
    where
        F: Fn() -> Arc<dyn Renderer> + Send + Sync + 'static,
    {
        self.factories.insert(kind.to_string(), Arc::new(factory));
    }

    /// Register a factory for `kind`; each kind can be registered once
    pub fn register<F>(&mut self, kind: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Arc<dyn Renderer> + Send + Sync + 'static,
    {
        if kind.trim().is_empty() {
            return Err(RendererSystemError::InvalidKind {
                kind: kind.to_string(),
                message: "kind must not be empty".to_string(),
            }
            .into());
        }
        if self.factories.contains_key(kind) {
            return Err(RendererSystemError::DuplicateFactory { kind: kind.to_string() }.into());
        }
        self.factories.insert(kind.to_string(), Arc::new(factory));
        Ok(())
    }

    /// Instantiate the renderer registered for `kind`
    pub fn instantiate(&self, kind: &str) -> Option<Arc<dyn Renderer>> {
        self.factories.get(kind).map(|factory| factory())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl fmt::Debug for RendererFactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererFactoryRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
