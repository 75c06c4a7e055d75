//! The sync pipeline entrypoint.
//!
//! Stages run strictly in order: fetch, locate, render, replace, persist,
//! publish. Each stage depends on the previous one's output, every failure
//! aborts the rest of the run, and the caller's cancellation token is checked
//! at stage boundaries only so the target file is never left half-written.

use serde::Serialize;

use blogroll_core::cancel::CancelToken;
use blogroll_core::config::SyncConfig;
use blogroll_core::types::PostList;
use blogroll_hashnode::{FetchError, HashnodeClient};
use blogroll_renderer::Renderer;

use crate::error::{read_err, Stage, SyncError};
use crate::publish::{PublishOutcome, Publisher};
use crate::writer::{atomic_write, WriteResult};

/// Content-API collaborator seam.
pub trait PostSource {
    fn fetch_latest(&self, config: &SyncConfig) -> Result<PostList, FetchError>;
}

impl PostSource for HashnodeClient {
    fn fetch_latest(&self, config: &SyncConfig) -> Result<PostList, FetchError> {
        self.latest_posts(&config.publication, config.max_posts)
    }
}

/// Post list known ahead of time — offline runs (`--posts-file`) and tests.
pub struct StaticPosts(pub PostList);

impl PostSource for StaticPosts {
    fn fetch_latest(&self, config: &SyncConfig) -> Result<PostList, FetchError> {
        Ok(PostList::bounded(
            self.0.posts().to_vec(),
            config.max_posts,
        ))
    }
}

/// Invocation modes, orthogonal to [`SyncConfig`].
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Report what would change without writing or publishing.
    pub dry_run: bool,
    /// Run the git publishing stage after a real write.
    pub publish: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        SyncOptions {
            dry_run: false,
            publish: true,
        }
    }
}

/// Summary of a completed sync run.
#[derive(Debug, Serialize)]
pub struct SyncReport {
    pub post_count: usize,
    pub write: WriteResult,
    pub publish: PublishOutcome,
}

/// Run the full pipeline for one target file.
pub fn run(
    config: &SyncConfig,
    source: &dyn PostSource,
    publisher: &dyn Publisher,
    options: SyncOptions,
    cancel: &CancelToken,
) -> Result<SyncReport, SyncError> {
    config.validate()?;

    checkpoint(Stage::Fetching, cancel)?;
    tracing::info!(
        "fetching latest {} posts for '{}'",
        config.max_posts,
        config.publication
    );
    let posts = source.fetch_latest(config)?;

    checkpoint(Stage::Locating, cancel)?;
    let document = std::fs::read_to_string(&config.target_file)
        .map_err(|e| read_err(&config.target_file, e))?;
    let found =
        blogroll_region::locate(&document, &config.markers).map_err(|source| SyncError::Marker {
            path: config.target_file.clone(),
            source,
        })?;

    checkpoint(Stage::Rendering, cancel)?;
    let renderer = Renderer::new()?;
    let fragment = renderer.render(&posts)?;

    // Replacing is pure; it cannot fail once locating has succeeded.
    let updated = blogroll_region::replace(&document, &found, &fragment);

    checkpoint(Stage::Persisting, cancel)?;
    let write = atomic_write(&config.target_file, &document, &updated, options.dry_run)?;

    checkpoint(Stage::Publishing, cancel)?;
    let publish = match &write {
        WriteResult::Written { path } if options.publish => {
            publisher.publish(path, &config.commit_message)?
        }
        _ => {
            tracing::debug!("publish skipped for {}", config.target_file.display());
            PublishOutcome::Skipped
        }
    };

    Ok(SyncReport {
        post_count: posts.len(),
        write,
        publish,
    })
}

fn checkpoint(stage: Stage, cancel: &CancelToken) -> Result<(), SyncError> {
    if cancel.is_cancelled() {
        Err(SyncError::Cancelled { stage })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
