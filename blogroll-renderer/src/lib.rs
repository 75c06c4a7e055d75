//! # blogroll-renderer
//!
//! Tera-based renderer that turns a [`blogroll_core::PostList`] into the
//! markdown fragment placed inside the managed region.
//!
//! Rendering is pure and deterministic: identical post lists produce
//! byte-identical fragments, which is what makes the surrounding replacement
//! idempotent. An empty list renders a placeholder line instead of failing.

pub mod context;
pub mod engine;
pub mod error;

pub use context::{PostCtx, PostsContext};
pub use engine::Renderer;
pub use error::RenderError;
