/// Application name
pub const APP_NAME: &str = "langswitch";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name prefix shared by every renderer descriptor
pub const WIDGET_PREFIX: &str = "tpw_";

/// Extension of renderer descriptor files (without the dot)
pub const WIDGET_EXTENSION: &str = "widget";

/// Directory holding renderers below a storage root
pub const WIDGETS_DIR: &str = "widgets";

/// Relative id of the renderer used whenever a selection cannot be resolved
pub const DEFAULT_RENDERER_ID: &str = "default/tpw_default.widget";

/// Factory kind of the fallback renderer
pub const DEFAULT_RENDERER_KIND: &str = "default";

/// Maximum number of bytes read when parsing a descriptor header
pub const HEADER_READ_LIMIT: usize = 8 * 1024;

/// Version string appended to registered assets
pub const ASSET_VERSION: &str = APP_VERSION;

/// Prefix for element ids emitted by the widget chrome
pub const SPAN_PREFIX: &str = "tr_";

/// Query parameter carrying the edit flag
pub const EDIT_PARAM: &str = "edit";

/// Query parameter carrying the language selector
pub const LANG_PARAM: &str = "lang";
