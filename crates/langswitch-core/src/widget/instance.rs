use serde::{Deserialize, Serialize};

use crate::renderer::id::RendererId;

/// Settings of one widget placement, as persisted by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInstanceConfig {
    /// Heading shown above the switcher; nothing is shown when empty
    #[serde(default)]
    pub title: String,

    /// Selected renderer
    #[serde(default)]
    pub renderer: RendererId,
}

impl WidgetInstanceConfig {
    pub fn new(title: &str, renderer: RendererId) -> Self {
        Self {
            title: title.to_string(),
            renderer,
        }
    }
}
