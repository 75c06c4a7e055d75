//! `blogroll diff` — show the unified diff of what sync would write.

use anyhow::{Context, Result};
use clap::Args;

use blogroll_sync::{diff_target, PostSource};

use super::common::ConfigArgs;

/// Arguments for `blogroll diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.to_config()?;
        let source = self.config.post_source(&config)?;
        let posts = source
            .fetch_latest(&config)
            .context("could not fetch posts")?;

        let diff = diff_target(&config, &posts).map_err(|err| {
            let stage = err.stage();
            anyhow::Error::new(err).context(format!("diff failed during {stage}"))
        })?;

        match diff {
            None => println!("No differences for {}.", config.target_file.display()),
            Some(diff) => {
                print!("{}", diff.unified_diff);
                if !diff.unified_diff.ends_with('\n') {
                    println!();
                }
            }
        }
        Ok(())
    }
}
