//! Tera rendering engine — [`Renderer`].
//!
//! The fragment template is baked into the binary at compile time via
//! `include_str!`. Output shape, one list entry per post:
//!
//! ```text
//! - [Title](https://blog.example.dev/title) (2024-05-01)
//!   Optional one-line summary.
//! ```
//!
//! An empty post list renders `_No posts published yet._` so replacement
//! still succeeds with zero posts.

use tera::Tera;

use blogroll_core::types::PostList;

use crate::context::PostsContext;
use crate::error::RenderError;

const POSTS_TEMPLATE_NAME: &str = "posts.md.tera";
const POSTS_TEMPLATE: &str = include_str!("templates/posts.md.tera");

/// Tera-based fragment renderer.
///
/// Uses the embedded template only. Create once with [`Renderer::new`] and
/// reuse; rendering itself is pure.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(POSTS_TEMPLATE_NAME, POSTS_TEMPLATE)?;
        Ok(Renderer { tera })
    }

    /// Render the markdown fragment for `posts`.
    ///
    /// The result is LF-only and carries no trailing whitespace, so repeated
    /// renders of the same list are byte-identical.
    pub fn render(&self, posts: &PostList) -> Result<String, RenderError> {
        let ctx = PostsContext::from_posts(posts);
        let raw = self.tera.render(POSTS_TEMPLATE_NAME, &ctx.to_tera_context()?)?;
        let fragment = raw.replace("\r\n", "\n");
        Ok(fragment.trim_end().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
