//! Error types for blogroll-core.

use thiserror::Error;

/// All errors that can arise from configuration validation.
///
/// Configuration errors are fatal before any network call is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The publication host was not supplied.
    #[error("publication host is required; pass --publication or set BLOGROLL_PUBLICATION")]
    MissingPublication,

    /// The post cap must be a positive integer.
    #[error("max posts must be at least 1, got {value}")]
    InvalidMaxPosts { value: usize },

    /// One of the marker tokens was empty.
    #[error("{which} marker must not be empty")]
    EmptyMarker { which: &'static str },

    /// Opening and closing tokens must differ, otherwise the region has no
    /// well-defined interior.
    #[error("opening and closing markers must differ")]
    IdenticalMarkers,
}
