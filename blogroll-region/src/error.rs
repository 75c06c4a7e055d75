//! Error types for blogroll-region.

use thiserror::Error;

/// All errors that can arise from locating the managed region.
///
/// Both variants are fatal for a sync run and abort before any file write.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// The opening marker does not occur anywhere in the document.
    #[error("opening marker '{marker}' not found in document")]
    MissingOpeningMarker { marker: String },

    /// No closing marker occurs after the opening marker. Closing tokens
    /// earlier in the document do not count — matches never run backward.
    #[error("closing marker '{marker}' not found after the opening marker")]
    MissingClosingMarker { marker: String },
}
