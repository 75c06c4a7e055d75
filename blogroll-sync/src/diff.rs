//! Unified diff of what `sync` would write, for `blogroll diff`.

use std::path::PathBuf;

use similar::TextDiff;

use blogroll_core::config::SyncConfig;
use blogroll_core::types::PostList;
use blogroll_renderer::Renderer;

use crate::error::{read_err, SyncError};

/// Rendered-versus-on-disk diff for the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render and replace in memory, then compare with the on-disk content.
///
/// Returns `Ok(None)` when the target is already in sync. No file is written.
pub fn diff_target(config: &SyncConfig, posts: &PostList) -> Result<Option<FileDiff>, SyncError> {
    let document = std::fs::read_to_string(&config.target_file)
        .map_err(|e| read_err(&config.target_file, e))?;
    let found =
        blogroll_region::locate(&document, &config.markers).map_err(|source| SyncError::Marker {
            path: config.target_file.clone(),
            source,
        })?;

    let renderer = Renderer::new()?;
    let fragment = renderer.render(posts)?;
    let updated = blogroll_region::replace(&document, &found, &fragment);

    if document == updated {
        return Ok(None);
    }

    let name = config
        .target_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.target_file.display().to_string());
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(&document, &updated)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: config.target_file.clone(),
        unified_diff: unified,
    }))
}
