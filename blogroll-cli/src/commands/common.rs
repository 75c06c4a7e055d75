//! Configuration flags shared by every subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use blogroll_core::config::{
    DEFAULT_CLOSING_MARKER, DEFAULT_COMMIT_MESSAGE, DEFAULT_ENDPOINT, DEFAULT_MAX_POSTS,
    DEFAULT_OPENING_MARKER, DEFAULT_TARGET_FILE,
};
use blogroll_core::{MarkerPair, PostList, SyncConfig};
use blogroll_hashnode::HashnodeClient;
use blogroll_sync::{PostSource, StaticPosts};

/// Flags mapped onto [`SyncConfig`]. Every field has a documented default
/// except the publication host.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Hashnode publication host, e.g. blog.example.dev.
    #[arg(long, env = "BLOGROLL_PUBLICATION")]
    pub publication: Option<String>,

    /// File containing the managed region.
    #[arg(long = "file", env = "BLOGROLL_FILE", default_value = DEFAULT_TARGET_FILE)]
    pub file: PathBuf,

    /// Opening marker token.
    #[arg(long, default_value = DEFAULT_OPENING_MARKER)]
    pub start_marker: String,

    /// Closing marker token.
    #[arg(long, default_value = DEFAULT_CLOSING_MARKER)]
    pub end_marker: String,

    /// Maximum number of posts to render.
    #[arg(long, env = "BLOGROLL_MAX_POSTS", default_value_t = DEFAULT_MAX_POSTS)]
    pub max_posts: usize,

    /// Commit message used when publishing.
    #[arg(long, default_value = DEFAULT_COMMIT_MESSAGE)]
    pub commit_message: String,

    /// Access token for the content API; public publications need none.
    #[arg(long, env = "HASHNODE_ACCESS_TOKEN")]
    pub token: Option<String>,

    /// GraphQL endpoint of the content API.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Read the post list from a JSON file instead of the network.
    #[arg(long)]
    pub posts_file: Option<PathBuf>,
}

impl ConfigArgs {
    /// Build and validate the [`SyncConfig`] for this invocation.
    pub fn to_config(&self) -> Result<SyncConfig> {
        let markers = MarkerPair::new(&self.start_marker, &self.end_marker)
            .context("invalid marker configuration")?;
        let config = SyncConfig {
            publication: self.publication.clone().unwrap_or_default(),
            target_file: self.file.clone(),
            markers,
            max_posts: self.max_posts,
            commit_message: self.commit_message.clone(),
            access_token: self.token.clone(),
            endpoint: self.endpoint.clone(),
        };
        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// The post source for this invocation: a JSON file when `--posts-file`
    /// was given, the content API otherwise.
    pub fn post_source(&self, config: &SyncConfig) -> Result<Box<dyn PostSource>> {
        match &self.posts_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read posts file {}", path.display()))?;
                let posts: PostList = serde_json::from_str(&raw)
                    .with_context(|| format!("could not parse posts file {}", path.display()))?;
                Ok(Box::new(StaticPosts(posts)))
            }
            None => Ok(Box::new(HashnodeClient::from_config(config))),
        }
    }
}
