//! # blogroll-sync
//!
//! The sync pipeline: fetch posts, locate the managed region, render the
//! fragment, replace the region interior, persist atomically, publish via
//! git. Every stage either succeeds or aborts the rest of the run with a
//! stage-tagged error.
//!
//! Call [`pipeline::run`] with a [`blogroll_core::SyncConfig`], a
//! [`PostSource`], and a [`Publisher`].

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod publish;
pub mod writer;

pub use diff::{diff_target, FileDiff};
pub use error::{Stage, SyncError};
pub use pipeline::{PostSource, StaticPosts, SyncOptions, SyncReport};
pub use publish::{GitPublisher, PublishError, PublishOutcome, Publisher};
pub use writer::WriteResult;
