//! Sync configuration — one explicit struct, constructed once and passed by
//! reference into the pipeline. No ambient singletons.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::types::MarkerPair;

pub const DEFAULT_TARGET_FILE: &str = "./README.md";
pub const DEFAULT_OPENING_MARKER: &str = "<!-- HASHNODE_POSTS:START -->";
pub const DEFAULT_CLOSING_MARKER: &str = "<!-- HASHNODE_POSTS:END -->";
pub const DEFAULT_MAX_POSTS: usize = 5;
pub const DEFAULT_COMMIT_MESSAGE: &str = "Update latest blog posts";
pub const DEFAULT_ENDPOINT: &str = "https://gql.hashnode.com";

/// Everything a sync run needs to know.
///
/// Only the publication host has no default; its absence is a fatal
/// configuration error caught before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Hashnode publication host, e.g. `blog.example.dev`.
    pub publication: String,
    /// File containing the managed region.
    pub target_file: PathBuf,
    /// Tokens delimiting the managed region.
    pub markers: MarkerPair,
    /// Upper bound on rendered posts (>= 1).
    pub max_posts: usize,
    /// Commit message used when publishing.
    pub commit_message: String,
    /// Optional API access token; public publications work without one.
    pub access_token: Option<String>,
    /// GraphQL endpoint of the content API.
    pub endpoint: String,
}

impl SyncConfig {
    /// Config for `publication` with every other field at its default.
    pub fn new(publication: impl Into<String>) -> Self {
        SyncConfig {
            publication: publication.into(),
            target_file: PathBuf::from(DEFAULT_TARGET_FILE),
            markers: MarkerPair::default(),
            max_posts: DEFAULT_MAX_POSTS,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            access_token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Check the fields that clap cannot: a present, non-empty publication
    /// and a positive post cap. Marker validity is enforced at
    /// [`MarkerPair`] construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.publication.trim().is_empty() {
            return Err(ConfigError::MissingPublication);
        }
        if self.max_posts < 1 {
            return Err(ConfigError::InvalidMaxPosts {
                value: self.max_posts,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SyncConfig::new("blog.example.dev");
        assert_eq!(config.target_file, PathBuf::from("./README.md"));
        assert_eq!(config.markers.opening(), "<!-- HASHNODE_POSTS:START -->");
        assert_eq!(config.markers.closing(), "<!-- HASHNODE_POSTS:END -->");
        assert_eq!(config.max_posts, 5);
        assert_eq!(config.commit_message, "Update latest blog posts");
        assert!(config.access_token.is_none());
        assert_eq!(config.endpoint, "https://gql.hashnode.com");
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = SyncConfig::new("blog.example.dev");
        config.validate().expect("default config is valid");
    }

    #[test]
    fn empty_publication_is_fatal() {
        let config = SyncConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPublication)
        ));
    }

    #[test]
    fn whitespace_publication_is_fatal() {
        let config = SyncConfig::new("   ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPublication)
        ));
    }

    #[test]
    fn zero_max_posts_is_fatal() {
        let mut config = SyncConfig::new("blog.example.dev");
        config.max_posts = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxPosts { value: 0 })
        ));
    }
}
