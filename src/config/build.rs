//! `[build]` section configuration.
//!
//! Contains the source directory and the paths of every generated file.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in thinkblog.toml - generator paths and limits.
///
/// Relative paths are resolved against the project root.
///
/// # Example
/// ```toml
/// [build]
/// posts = "src/posts"      # Markdown sources
/// feed = "feed.xml"        # RSS output
/// feed_limit = 10
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Book source directory, created when missing. Also the viewer's site root.
    #[serde(default = "defaults::build::source")]
    #[educe(Default = defaults::build::source())]
    pub source: PathBuf,

    /// Directory holding the `*.md` posts.
    #[serde(default = "defaults::build::posts")]
    #[educe(Default = defaults::build::posts())]
    pub posts: PathBuf,

    /// Home page listing.
    #[serde(default = "defaults::build::index")]
    #[educe(Default = defaults::build::index())]
    pub index: PathBuf,

    /// Table of contents.
    #[serde(default = "defaults::build::summary")]
    #[educe(Default = defaults::build::summary())]
    pub summary: PathBuf,

    /// RSS 2.0 feed.
    #[serde(default = "defaults::build::feed")]
    #[educe(Default = defaults::build::feed())]
    pub feed: PathBuf,

    /// JSON post manifest read by the viewer.
    #[serde(default = "defaults::build::manifest")]
    #[educe(Default = defaults::build::manifest())]
    pub manifest: PathBuf,

    /// Maximum number of items in the feed.
    #[serde(default = "defaults::build::feed_limit")]
    #[educe(Default = defaults::build::feed_limit())]
    pub feed_limit: usize,

    /// Blurb shown under the index heading.
    #[serde(default = "defaults::build::welcome")]
    #[educe(Default = defaults::build::welcome())]
    pub welcome: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.source, PathBuf::from("src"));
        assert_eq!(config.build.posts, PathBuf::from("src/posts"));
        assert_eq!(config.build.index, PathBuf::from("src/index.md"));
        assert_eq!(config.build.summary, PathBuf::from("src/SUMMARY.md"));
        assert_eq!(config.build.feed, PathBuf::from("feed.xml"));
        assert_eq!(config.build.manifest, PathBuf::from("src/posts/index.json"));
        assert_eq!(config.build.feed_limit, 20);
        assert!(config.build.welcome.starts_with("Welcome to my blog!"));
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [build]
            posts = "content"
            feed = "public/rss.xml"
            feed_limit = 5
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.posts, PathBuf::from("content"));
        assert_eq!(config.build.feed, PathBuf::from("public/rss.xml"));
        assert_eq!(config.build.feed_limit, 5);
        assert_eq!(config.build.index, PathBuf::from("src/index.md"));
    }

    #[test]
    fn test_build_unknown_field_rejection() {
        let config = r#"
            [build]
            minify = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
