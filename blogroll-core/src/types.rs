//! Domain types for blogroll.
//!
//! Posts are immutable once fetched; every field beyond id and title is
//! optional because the content API does not guarantee them. All types are
//! serializable via serde so post lists can round-trip through JSON files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// PostRecord
// ---------------------------------------------------------------------------

/// A single published blog post, as returned by the content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl PostRecord {
    /// Minimal post with just an id and title; optional fields unset.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        PostRecord {
            id: id.into(),
            title: title.into(),
            summary: None,
            published_at: None,
            url: None,
            cover_image: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PostList
// ---------------------------------------------------------------------------

/// Ordered list of posts, API response order preserved (most recent first —
/// never re-sorted here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct PostList(Vec<PostRecord>);

impl PostList {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        PostList(posts)
    }

    /// Build a list capped at `max` entries, keeping the head of the
    /// sequence. The content API is asked for `max` posts, but the cap is
    /// enforced again here so over-long payloads cannot widen the region.
    pub fn bounded(mut posts: Vec<PostRecord>, max: usize) -> Self {
        posts.truncate(max);
        PostList(posts)
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostRecord> {
        self.0.iter()
    }
}

impl From<Vec<PostRecord>> for PostList {
    fn from(posts: Vec<PostRecord>) -> Self {
        PostList(posts)
    }
}

// ---------------------------------------------------------------------------
// MarkerPair
// ---------------------------------------------------------------------------

/// The literal opening/closing tokens that delimit the managed region.
///
/// Constructor-validated: both tokens non-empty and distinct. Fields are
/// private so an invalid pair cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    opening: String,
    closing: String,
}

impl MarkerPair {
    pub fn new(
        opening: impl Into<String>,
        closing: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let opening = opening.into();
        let closing = closing.into();
        if opening.is_empty() {
            return Err(ConfigError::EmptyMarker { which: "opening" });
        }
        if closing.is_empty() {
            return Err(ConfigError::EmptyMarker { which: "closing" });
        }
        if opening == closing {
            return Err(ConfigError::IdenticalMarkers);
        }
        Ok(MarkerPair { opening, closing })
    }

    pub fn opening(&self) -> &str {
        &self.opening
    }

    pub fn closing(&self) -> &str {
        &self.closing
    }
}

impl Default for MarkerPair {
    /// The stock Hashnode markers.
    fn default() -> Self {
        MarkerPair {
            opening: crate::config::DEFAULT_OPENING_MARKER.to_string(),
            closing: crate::config::DEFAULT_CLOSING_MARKER.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
