//! Error types for blogroll-sync.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use blogroll_core::error::ConfigError;
use blogroll_hashnode::FetchError;
use blogroll_region::RegionError;
use blogroll_renderer::RenderError;

use crate::publish::PublishError;

/// Pipeline stage names, used to tag failures for the exit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuring,
    Fetching,
    Locating,
    Rendering,
    Replacing,
    Persisting,
    Publishing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Configuring => "configuring",
            Stage::Fetching => "fetching",
            Stage::Locating => "locating",
            Stage::Rendering => "rendering",
            Stage::Replacing => "replacing",
            Stage::Persisting => "persisting",
            Stage::Publishing => "publishing",
        };
        f.write_str(name)
    }
}

/// All errors that can arise from a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Invalid configuration, caught before any network call.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The content API call failed; nothing on disk was touched.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The target file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target file lacks a well-formed marker pair.
    #[error("marker error in {path}: {source}")]
    Marker {
        path: PathBuf,
        #[source]
        source: RegionError,
    },

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error while persisting, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Commit/push failure. The no-op "nothing to commit" case is not an
    /// error and never takes this path.
    #[error("publish error: {0}")]
    Publish(#[from] PublishError),

    /// The caller's cancellation token fired at a stage boundary.
    #[error("cancelled during {stage}")]
    Cancelled { stage: Stage },
}

impl SyncError {
    /// The stage this failure belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            SyncError::Config(_) => Stage::Configuring,
            SyncError::Fetch(_) => Stage::Fetching,
            SyncError::Read { .. } | SyncError::Marker { .. } => Stage::Locating,
            SyncError::Render(_) => Stage::Rendering,
            SyncError::Io { .. } => Stage::Persisting,
            SyncError::Publish(_) => Stage::Publishing,
            SyncError::Cancelled { stage } => *stage,
        }
    }
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::Read`].
pub(crate) fn read_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Read {
        path: path.into(),
        source,
    }
}
