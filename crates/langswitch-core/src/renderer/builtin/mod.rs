//! Renderers compiled into the crate. Each is bound to descriptor files whose
//! `Renderer` header (or short name) matches its `KIND`.
pub mod default;
pub mod dropdown;
pub mod flags;

pub use default::DefaultRenderer;
pub use dropdown::DropdownRenderer;
pub use flags::FlagsRenderer;
