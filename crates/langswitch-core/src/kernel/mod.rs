//! # Langswitch Core Kernel
//!
//! Cross-cutting pieces shared by every subsystem of `langswitch-core`.
//!
//! ## Key Components:
//!
//! - **Core Constants**: file naming conventions for renderer descriptors and
//!   the fixed fallback renderer, via the `constants` submodule.
//! - **Error Handling**: the aggregate [`Error`](error::Error) type and the
//!   `Result` alias in the `error` submodule. Subsystem errors
//!   ([`RendererSystemError`](crate::renderer::error::RendererSystemError),
//!   [`StorageSystemError`](crate::storage::error::StorageSystemError),
//!   [`LinkSystemError`](crate::links::error::LinkSystemError)) convert into it
//!   with `?`.
pub mod constants;
pub mod error;

pub use error::{Error, Result};
