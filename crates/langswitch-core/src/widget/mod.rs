//! # Widget Placements
//!
//! One configured switcher on the page ([`WidgetInstanceConfig`]) and the
//! [`WidgetPresenter`] that wraps a renderer's output in the host's chrome.
pub mod instance;
pub mod presenter;

pub use instance::WidgetInstanceConfig;
pub use presenter::{DisplayMode, PageState, PresenterOptions, WidgetChrome, WidgetPresenter};
