//! Atomic, digest-gated persistence of the updated document.
//!
//! ## Write protocol
//!
//! 1. SHA-256 hash the current and updated documents.
//! 2. Equal digests → skip the write entirely (byte-level no-op).
//! 3. Otherwise write to `<path>.blogroll.tmp`.
//! 4. Rename to the final path (atomic on POSIX) — a concurrent reader sees
//!    the old content or the new content, never a partial write.
//!
//! The document is written exactly as produced; line endings outside the
//! managed region are whatever the file already had.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{io_err, SyncError};

/// Outcome of persisting the target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum WriteResult {
    /// File was rewritten with changed content.
    Written { path: PathBuf },
    /// Updated document is byte-identical to what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been rewritten.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

fn digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Persist `updated` to `path`, skipping the write when nothing changed.
pub(crate) fn atomic_write(
    path: &Path,
    current: &str,
    updated: &str,
    dry_run: bool,
) -> Result<WriteResult, SyncError> {
    if digest(current) == digest(updated) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    let tmp = PathBuf::from(format!("{}.blogroll.tmp", path.display()));
    std::fs::write(&tmp, updated).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn changed_content_is_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "old").unwrap();

        let result = atomic_write(&path, "old", "new", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn identical_content_is_unchanged_and_not_rewritten() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "same").unwrap();
        let mtime_before = fs::metadata(&path).unwrap().modified().unwrap();

        let result = atomic_write(&path, "same", "same", false).unwrap();
        assert!(matches!(result, WriteResult::Unchanged { .. }));

        let mtime_after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(mtime_after, mtime_before, "no-op must not rewrite the file");
    }

    #[test]
    fn dry_run_reports_would_write_and_touches_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "old").unwrap();

        let result = atomic_write(&path, "old", "new", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "old").unwrap();
        atomic_write(&path, "old", "new", false).unwrap();

        let tmp_path = PathBuf::from(format!("{}.blogroll.tmp", path.display()));
        assert!(!tmp_path.exists(), ".blogroll.tmp must be cleaned up");
    }

    #[test]
    #[cfg(unix)]
    fn failed_write_leaves_original_untouched() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();
        let path = readonly_dir.join("README.md");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let err = atomic_write(&path, "original", "new content", false)
            .expect_err("write into readonly dir should fail");
        assert!(matches!(err, SyncError::Io { .. }));

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }
}
