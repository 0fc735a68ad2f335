//! rss feed generation.
//!
//! Builds an RSS 2.0 channel from the most recent posts and writes it to
//! `[build.feed]`.

use super::write_output;
use crate::{
    config::SiteConfig,
    log,
    post::Post,
    utils::date::{now_rfc1123, rfc1123},
};
use anyhow::{Result, anyhow};
use rss::{
    ChannelBuilder, GuidBuilder, ItemBuilder,
    extension::atom::{AtomExtension, Link},
    validation::Validate,
};

const GENERATOR: &str = "thinkblog";

/// Published feed file name, relative to `[base.url]`.
const FEED_FILE: &str = "feed.xml";

// ============================================================================
// Public API
// ============================================================================

/// Write the rss feed for the first `[build.feed_limit]` posts.
pub fn generate_rss(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    let xml = RssFeed::build(config, posts).into_xml()?;
    write_output("rss", &config.build.feed, &xml)
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    posts: &'a [Post],
}

impl<'a> RssFeed<'a> {
    /// Keep only the posts that make it into the feed. `posts` must already be
    /// sorted newest first.
    fn build(config: &'a SiteConfig, posts: &'a [Post]) -> Self {
        let limit = config.build.feed_limit.min(posts.len());
        Self {
            config,
            posts: &posts[..limit],
        }
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let now = now_rfc1123();
        let items: Vec<_> = self
            .posts
            .iter()
            .map(|post| post_to_rss_item(post, self.config, &now))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.base.title)
            .link(&self.config.base.url)
            .description(&self.config.base.description)
            .language(self.config.base.language.clone())
            .last_build_date(now.clone())
            .generator(GENERATOR.to_string())
            .managing_editor(managing_editor(self.config))
            .atom_ext(Some(self_link(self.config)))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;
        Ok(channel.to_string())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `atom:link rel="self"` pointing at the published feed.
fn self_link(config: &SiteConfig) -> AtomExtension {
    let mut link = Link::default();
    link.set_href(format!("{}/{FEED_FILE}", config.base.url_root()));
    link.set_rel("self");
    link.set_mime_type(Some("application/rss+xml".to_string()));

    let mut atom = AtomExtension::default();
    atom.set_links(vec![link]);
    atom
}

/// Channel `managingEditor`, omitted when no author is configured.
fn managing_editor(config: &SiteConfig) -> Option<String> {
    let author = config.base.author.trim();
    (!author.is_empty()).then(|| author.to_owned())
}

/// Absolute url of a post page: `{base}/posts/{slug}.html`.
fn post_url(config: &SiteConfig, slug: &str) -> String {
    format!("{}/posts/{slug}.html", config.base.url_root())
}

/// Opaque, stable identifier derived from the post url.
fn guid_for(link: &str) -> String {
    blake3::hash(link.as_bytes()).to_hex().to_string()
}

/// Convert a `Post` to an rss item.
///
/// Posts without a usable date are stamped with the build time `now`.
fn post_to_rss_item(post: &Post, config: &SiteConfig, now: &str) -> rss::Item {
    let link = post_url(config, &post.slug);
    let pub_date = match post.date.as_deref() {
        Some(date) => rfc1123(date).unwrap_or_else(|| {
            log!("warn"; "post {} has unparseable date `{date}`, using build time", post.filename);
            now.to_string()
        }),
        None => now.to_string(),
    };
    let description = if post.description.is_empty() {
        post.title.clone()
    } else {
        post.description.clone()
    };

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(
            GuidBuilder::default()
                .permalink(false)
                .value(guid_for(&link))
                .build(),
        )
        .pub_date(pub_date)
        .description(description)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{sort_posts, tests::make_post};

    fn make_config(url: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.url = url.to_string();
        config
    }

    fn feed_items(config: &SiteConfig, posts: &[Post]) -> Vec<rss::Item> {
        let xml = RssFeed::build(config, posts).into_xml().unwrap();
        rss::Channel::read_from(xml.as_bytes())
            .unwrap()
            .items()
            .to_vec()
    }

    #[test]
    fn test_empty_feed_has_no_items() {
        let config = make_config("https://example.com");
        let xml = RssFeed::build(&config, &[]).into_xml().unwrap();

        assert!(!xml.contains("<item>"));
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert_eq!(channel.title(), "ThinkBlog");
        assert_eq!(channel.language(), Some("en"));
        assert!(channel.last_build_date().is_some());
    }

    #[test]
    fn test_channel_has_atom_self_link_and_editor() {
        let mut config = make_config("https://example.com/blog/");
        config.base.author = "Jane Doe".into();
        let xml = RssFeed::build(&config, &[]).into_xml().unwrap();
        assert!(xml.contains("xmlns:atom=\"http://www.w3.org/2005/Atom\""));

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        let links = channel.atom_ext().unwrap().links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href(), "https://example.com/blog/feed.xml");
        assert_eq!(links[0].rel(), "self");
        assert_eq!(links[0].mime_type(), Some("application/rss+xml"));
        assert_eq!(channel.managing_editor(), Some("Jane Doe"));
    }

    #[test]
    fn test_blank_author_omits_managing_editor() {
        let mut config = make_config("https://example.com");
        config.base.author = "  ".into();
        let xml = RssFeed::build(&config, &[]).into_xml().unwrap();
        assert!(!xml.contains("managingEditor"));
    }

    #[test]
    fn test_feed_caps_at_twenty_most_recent() {
        let config = make_config("https://example.com");
        let mut posts: Vec<_> = (1..=25)
            .map(|day| make_post(&format!("post-{day:02}.md"), Some(&format!("2024-01-{day:02}"))))
            .collect();
        sort_posts(&mut posts);

        let items = feed_items(&config, &posts);
        assert_eq!(items.len(), 20);
        assert_eq!(
            items[0].link(),
            Some("https://example.com/posts/post-25.html")
        );
        assert_eq!(
            items[19].link(),
            Some("https://example.com/posts/post-06.html")
        );
    }

    #[test]
    fn test_item_fields() {
        let config = make_config("https://example.com/blog/");
        let mut post = make_post("hello.md", Some("2024-01-01"));
        post.description = "Greetings".into();

        let item = post_to_rss_item(&post, &config, "now");
        assert_eq!(item.title(), Some("Title of hello"));
        assert_eq!(item.link(), Some("https://example.com/blog/posts/hello.html"));
        assert_eq!(item.pub_date(), Some("Mon, 01 Jan 2024 00:00:00 GMT"));
        assert_eq!(item.description(), Some("Greetings"));

        let guid = item.guid().unwrap();
        assert!(!guid.is_permalink());
        assert_eq!(guid.value().len(), 64);
    }

    #[test]
    fn test_description_falls_back_to_title() {
        let config = make_config("https://example.com");
        let item = post_to_rss_item(&make_post("bare.md", None), &config, "now");
        assert_eq!(item.description(), Some("Title of bare"));
    }

    #[test]
    fn test_missing_or_bad_date_uses_build_time() {
        let config = make_config("https://example.com");
        let now = "Tue, 02 Jan 2024 03:04:05 GMT";

        let undated = post_to_rss_item(&make_post("a.md", None), &config, now);
        assert_eq!(undated.pub_date(), Some(now));

        let garbled = post_to_rss_item(&make_post("b.md", Some("whenever")), &config, now);
        assert_eq!(garbled.pub_date(), Some(now));
    }

    #[test]
    fn test_guid_is_deterministic() {
        let config = make_config("https://example.com");
        let post = make_post("same.md", Some("2024-01-01"));

        let first = post_to_rss_item(&post, &config, "now");
        let second = post_to_rss_item(&post, &config, "later");
        assert_eq!(first.guid(), second.guid());

        let other = post_to_rss_item(&make_post("other.md", None), &config, "now");
        assert_ne!(first.guid(), other.guid());
    }

    #[test]
    fn test_text_is_entity_escaped() {
        let config = make_config("https://example.com");
        let mut post = make_post("esc.md", Some("2024-01-01"));
        post.title = "Fish & <Chips>".into();

        let xml = RssFeed::build(&config, std::slice::from_ref(&post))
            .into_xml()
            .unwrap();
        assert!(xml.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(!xml.contains("<Chips>"));

        let items = feed_items(&config, &[post]);
        assert_eq!(items[0].title(), Some("Fish & <Chips>"));
    }
}
