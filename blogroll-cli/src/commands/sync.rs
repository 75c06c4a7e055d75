//! `blogroll sync` — run the full fetch/replace/persist/publish pipeline.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use blogroll_core::CancelToken;
use blogroll_sync::{
    pipeline, GitPublisher, PublishOutcome, SyncOptions, SyncReport, WriteResult,
};

use super::common::ConfigArgs;

/// Arguments for `blogroll sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show what would be written without touching the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the file but skip the git commit/push step.
    #[arg(long)]
    pub no_publish: bool,

    /// Print the sync report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.to_config()?;
        let source = self.config.post_source(&config)?;
        let publisher = GitPublisher::for_target(&config.target_file);
        let options = SyncOptions {
            dry_run: self.dry_run,
            publish: !self.no_publish && !self.dry_run,
        };
        let cancel = CancelToken::new();

        let report = pipeline::run(&config, source.as_ref(), &publisher, options, &cancel)
            .map_err(|err| {
                let stage = err.stage();
                anyhow::Error::new(err).context(format!("sync failed during {stage}"))
            })?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
        print_report(&report, self.dry_run);
        Ok(())
    }
}

fn print_report(report: &SyncReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    match &report.write {
        WriteResult::Written { path } => println!(
            "{prefix}{} wrote {} ({} posts)",
            "✎".green(),
            path.display(),
            report.post_count
        ),
        WriteResult::WouldWrite { path } => println!(
            "{prefix}{} would write {} ({} posts)",
            "~".yellow(),
            path.display(),
            report.post_count
        ),
        WriteResult::Unchanged { path } => println!(
            "{prefix}{} {} already up to date",
            "·".dimmed(),
            path.display()
        ),
    }
    match &report.publish {
        PublishOutcome::Committed => println!("{} committed and pushed", "✓".green()),
        PublishOutcome::NothingToCommit => println!("{} nothing to commit", "·".dimmed()),
        PublishOutcome::Skipped => {}
    }
}
