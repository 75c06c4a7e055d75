//! Blogroll core library — domain types, configuration, errors.
//!
//! Public API surface:
//! - [`types`] — [`PostRecord`], [`PostList`], [`MarkerPair`]
//! - [`config`] — [`SyncConfig`] and its defaults
//! - [`error`] — [`ConfigError`]
//! - [`cancel`] — [`CancelToken`]

pub mod cancel;
pub mod config;
pub mod error;
pub mod types;

pub use cancel::CancelToken;
pub use config::SyncConfig;
pub use error::ConfigError;
pub use types::{MarkerPair, PostList, PostRecord};
