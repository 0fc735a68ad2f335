//! Client-side viewer.
//!
//! A router over five mutually exclusive views. It loads the post manifest
//! once, then maps every location to either the post list (`?`) or a single
//! post (`?post=<slug>`):
//!
//! ```text
//! start ──► fetch posts/index.json ──► error? ──► Error
//!                      │
//!                      ▼
//!               handle_route ──► ?post=S ──► Loading ──► NotFound | Error | PostDetail
//!                      │
//!                      └──────► PostList ◄── search(query)
//! ```
//!
//! The router touches the outside world only through injected capabilities:
//! a [`Fetcher`] for resources, a [`Markdown`] renderer and a [`Surface`] for
//! view mutations. [`Document`] is the in-memory surface used by the `view`
//! command and the tests.

pub mod document;
pub mod fetch;
pub mod history;
pub mod list;
pub mod markdown;
pub mod router;

pub use document::{Document, Surface};
pub use fetch::{DirFetcher, Fetcher, HttpFetcher};
pub use history::Location;
pub use markdown::Markdown;
pub use router::Router;

use crate::{config::SiteConfig, manifest::ManifestEntry};

/// The view currently shown. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Loading,
    PostList,
    PostDetail,
    NotFound,
    Error,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::Loading,
        Self::PostList,
        Self::PostDetail,
        Self::NotFound,
        Self::Error,
    ];
}

/// Router-owned client state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub posts: Vec<ManifestEntry>,
    pub view: View,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            view: View::Loading,
        }
    }
}

/// Site title and description used for page metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

impl From<&SiteConfig> for SiteMeta {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.base.title.clone(),
            description: config.base.description.clone(),
        }
    }
}
