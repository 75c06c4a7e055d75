//! Git publisher — stage, commit, push, with structured no-op detection.
//!
//! Whether there is anything to commit is decided from the exit code of
//! `git diff --cached --quiet`, never by sniffing error text. A rejected
//! push gets exactly one `pull --rebase` + `push` retry before failing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde::Serialize;
use thiserror::Error;

/// Outcome of the publishing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishOutcome {
    /// The change was committed and pushed.
    Committed,
    /// Git reported no content delta to record. Success, not an error.
    NothingToCommit,
    /// Publishing was not attempted (disabled, dry-run, or byte-level no-op
    /// write).
    Skipped,
}

/// All errors that can arise from commit/push operations.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The git binary could not be started.
    #[error("failed to run git: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// A git command exited non-zero.
    #[error("git {command} failed ({status}): {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },

    /// The push was rejected twice, once before and once after the single
    /// pull-rebase retry.
    #[error("push rejected after pull --rebase retry: {cause}")]
    PushRejected { cause: String },
}

/// Version-control collaborator seam. Implemented by [`GitPublisher`] for
/// real runs and by fakes in pipeline tests.
pub trait Publisher {
    fn publish(&self, path: &Path, message: &str) -> Result<PublishOutcome, PublishError>;
}

/// Publishes by shelling out to `git` in a fixed working directory.
pub struct GitPublisher {
    work_dir: PathBuf,
}

impl GitPublisher {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        GitPublisher {
            work_dir: work_dir.into(),
        }
    }

    /// Publisher rooted at the target file's directory.
    pub fn for_target(target_file: &Path) -> Self {
        let work_dir = target_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(work_dir)
    }

    fn git(&self, args: &[&str]) -> Result<Output, PublishError> {
        tracing::debug!("git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| PublishError::Spawn { source })
    }

    fn git_ok(&self, args: &[&str]) -> Result<(), PublishError> {
        let output = self.git(args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(command_error(args, &output))
        }
    }
}

fn command_error(args: &[&str], output: &Output) -> PublishError {
    PublishError::Command {
        command: args.join(" "),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, path: &Path, message: &str) -> Result<PublishOutcome, PublishError> {
        let target = path.to_string_lossy();
        let target = target.as_ref();

        self.git_ok(&["add", "--", target])?;

        // Exit 0: nothing staged. Exit 1: staged changes present.
        let probe = self.git(&["diff", "--cached", "--quiet", "--", target])?;
        match probe.status.code() {
            Some(0) => {
                tracing::info!("nothing to commit for {}", path.display());
                return Ok(PublishOutcome::NothingToCommit);
            }
            Some(1) => {}
            _ => {
                return Err(command_error(
                    &["diff", "--cached", "--quiet", "--", target],
                    &probe,
                ))
            }
        }

        self.git_ok(&["commit", "-m", message])?;

        if let Err(rejected) = self.git_ok(&["push"]) {
            tracing::warn!("push rejected ({rejected}), retrying once after pull --rebase");
            self.git_ok(&["pull", "--rebase"])?;
            self.git_ok(&["push"])
                .map_err(|err| PublishError::PushRejected {
                    cause: err.to_string(),
                })?;
        }

        tracing::info!("committed and pushed {}", path.display());
        Ok(PublishOutcome::Committed)
    }
}

// ---------------------------------------------------------------------------
// Tests — run against real throwaway git repositories.
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn init_repo(dir: &Path) {
        run_git(dir, &["init", "-q"]);
        run_git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        configure_identity(dir);
    }

    fn init_bare(dir: &Path) {
        run_git(dir, &["init", "-q", "--bare"]);
        run_git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    }

    fn configure_identity(dir: &Path) {
        run_git(dir, &["config", "user.email", "sync@example.dev"]);
        run_git(dir, &["config", "user.name", "blogroll test"]);
    }

    fn git_stdout(dir: &Path, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("run git");
        assert!(output.status.success(), "git {args:?} failed");
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    #[test]
    fn unchanged_file_is_nothing_to_commit() {
        let repo = TempDir::new().unwrap();
        init_repo(repo.path());
        let file = repo.path().join("README.md");
        fs::write(&file, "content\n").unwrap();
        run_git(repo.path(), &["add", "README.md"]);
        run_git(repo.path(), &["commit", "-q", "-m", "initial"]);

        let publisher = GitPublisher::new(repo.path());
        let outcome = publisher.publish(&file, "no change").expect("publish");
        assert_eq!(outcome, PublishOutcome::NothingToCommit);
    }

    #[test]
    fn changed_file_is_committed_and_pushed() {
        let remote = TempDir::new().unwrap();
        init_bare(remote.path());

        let repo = TempDir::new().unwrap();
        init_repo(repo.path());
        let file = repo.path().join("README.md");
        fs::write(&file, "v1\n").unwrap();
        run_git(repo.path(), &["add", "README.md"]);
        run_git(repo.path(), &["commit", "-q", "-m", "initial"]);
        run_git(
            repo.path(),
            &["remote", "add", "origin", &remote.path().display().to_string()],
        );
        run_git(repo.path(), &["push", "-q", "-u", "origin", "main"]);

        fs::write(&file, "v2\n").unwrap();
        let publisher = GitPublisher::new(repo.path());
        let outcome = publisher
            .publish(&file, "update posts")
            .expect("publish");
        assert_eq!(outcome, PublishOutcome::Committed);

        let subject = git_stdout(repo.path(), &["log", "-1", "--format=%s"]);
        assert_eq!(subject, "update posts");

        let local = git_stdout(repo.path(), &["rev-parse", "HEAD"]);
        let pushed = git_stdout(remote.path(), &["rev-parse", "main"]);
        assert_eq!(pushed, local, "remote must have the pushed commit");
    }

    #[test]
    fn rejected_push_recovers_with_one_pull_rebase() {
        let remote = TempDir::new().unwrap();
        init_bare(remote.path());

        // Seed the remote with an initial commit.
        let seed = TempDir::new().unwrap();
        init_repo(seed.path());
        fs::write(seed.path().join("README.md"), "v1\n").unwrap();
        run_git(seed.path(), &["add", "README.md"]);
        run_git(seed.path(), &["commit", "-q", "-m", "initial"]);
        run_git(
            seed.path(),
            &["remote", "add", "origin", &remote.path().display().to_string()],
        );
        run_git(seed.path(), &["push", "-q", "-u", "origin", "main"]);

        let clone_a = TempDir::new().unwrap();
        let clone_b = TempDir::new().unwrap();
        let remote_url = remote.path().display().to_string();
        run_git(clone_a.path(), &["clone", "-q", &remote_url, "."]);
        run_git(clone_b.path(), &["clone", "-q", &remote_url, "."]);
        configure_identity(clone_a.path());
        configure_identity(clone_b.path());

        // Someone else lands a commit first.
        fs::write(clone_b.path().join("OTHER.md"), "elsewhere\n").unwrap();
        run_git(clone_b.path(), &["add", "OTHER.md"]);
        run_git(clone_b.path(), &["commit", "-q", "-m", "other change"]);
        run_git(clone_b.path(), &["push", "-q"]);

        // Our push is now behind; publish must pull-rebase once and succeed.
        let file = clone_a.path().join("README.md");
        fs::write(&file, "v2\n").unwrap();
        let publisher = GitPublisher::new(clone_a.path());
        let outcome = publisher
            .publish(&file, "update posts")
            .expect("publish should recover");
        assert_eq!(outcome, PublishOutcome::Committed);

        let count = git_stdout(remote.path(), &["rev-list", "--count", "main"]);
        assert_eq!(count, "3", "remote must hold both concurrent commits");
    }
}
