//! Template context — serializable rendering payload built from a [`PostList`].

use serde::{Deserialize, Serialize};

use blogroll_core::types::{PostList, PostRecord};

use crate::error::RenderError;

/// Root context handed to the template: just the post entries.
///
/// Deliberately carries no clock or counter so rendering stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsContext {
    pub posts: Vec<PostCtx>,
}

/// One post as the template sees it. Timestamps are pre-formatted here so
/// the template stays free of date logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCtx {
    pub title: String,
    pub url: Option<String>,
    pub published_at: Option<String>,
    pub summary: Option<String>,
    pub cover_image: Option<String>,
}

impl PostsContext {
    /// Build a context from a fetched post list, preserving order.
    pub fn from_posts(posts: &PostList) -> Self {
        let posts = posts
            .iter()
            .map(|p: &PostRecord| PostCtx {
                title: p.title.clone(),
                url: p.url.clone(),
                published_at: p.published_at.map(|at| at.format("%Y-%m-%d").to_string()),
                summary: p.summary.clone(),
                cover_image: p.cover_image.clone(),
            })
            .collect();
        PostsContext { posts }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
