//! `blogroll render` — print the rendered markdown fragment.

use anyhow::{Context, Result};
use clap::Args;

use blogroll_renderer::Renderer;
use blogroll_sync::PostSource;

use super::common::ConfigArgs;

/// Arguments for `blogroll render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.to_config()?;
        let source = self.config.post_source(&config)?;
        let posts = source
            .fetch_latest(&config)
            .context("could not fetch posts")?;

        let renderer = Renderer::new().context("renderer setup failed")?;
        let fragment = renderer.render(&posts).context("rendering failed")?;
        println!("{fragment}");
        Ok(())
    }
}
