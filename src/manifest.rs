//! The post manifest shared by the generator and the viewer.
//!
//! The generator writes it as `posts/index.json`; the viewer fetches it to build
//! the post list and to resolve `?post=<slug>` routes.

use crate::post::Post;
use serde::{Deserialize, Serialize};

/// Manifest location relative to the site root.
pub const MANIFEST_PATH: &str = "posts/index.json";

/// Post metadata without content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
    pub slug: String,
}

impl From<&Post> for ManifestEntry {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            date: post.date.clone(),
            description: post.description.clone(),
            slug: post.slug.clone(),
        }
    }
}

/// Path of the raw markdown for `slug`, relative to the site root.
pub fn post_path(slug: &str) -> String {
    format!("posts/{slug}.md")
}
