//! Blogroll — keep a README section in sync with your latest blog posts.
//!
//! # Usage
//!
//! ```text
//! blogroll sync --publication blog.example.dev [--dry-run] [--no-publish]
//! blogroll diff --publication blog.example.dev
//! blogroll render --publication blog.example.dev
//! ```
//!
//! Any command accepts `--posts-file posts.json` to run from a local post
//! list instead of the content API.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, render::RenderArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "blogroll",
    version,
    about = "Sync the latest blog posts into a README's managed region",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch posts, rewrite the managed region, commit and push.
    Sync(SyncArgs),

    /// Show the unified diff of what sync would write.
    Diff(DiffArgs),

    /// Print the rendered markdown fragment to stdout.
    Render(RenderArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Render(args) => args.run(),
    }
}
