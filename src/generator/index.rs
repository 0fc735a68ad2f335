//! Home page listing (`index.md`).

use super::write_output;
use crate::{config::SiteConfig, post::Post};
use anyhow::Result;
use std::fmt::Write;

const NO_POSTS: &str = "*No posts yet. Check back soon!*";

/// Write the index document to `[build.index]`.
pub fn generate_index(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    write_output("index", &config.build.index, &render_index(config, posts))
}

/// Render the index: heading, welcome blurb, then one entry per post.
pub fn render_index(config: &SiteConfig, posts: &[Post]) -> String {
    let mut content = format!(
        "# {}\n\n{}\n\n## Latest Posts\n\n",
        config.base.title, config.build.welcome
    );

    if posts.is_empty() {
        content.push_str(NO_POSTS);
        content.push('\n');
        return content;
    }

    for post in posts {
        writeln!(content, "### [{}](./posts/{}.md)", post.title, post.slug).ok();
        if let Some(line) = byline(post) {
            writeln!(content, "{line}").ok();
        }
        content.push('\n');
    }
    content
}

/// `*date* — description`, either part optional.
fn byline(post: &Post) -> Option<String> {
    let date = post.date.as_deref().map(|date| format!("*{date}*"));
    let description = (!post.description.is_empty()).then(|| format!(" — {}", post.description));

    match (date, description) {
        (None, None) => None,
        (date, description) => Some(format!(
            "{}{}",
            date.unwrap_or_default(),
            description.unwrap_or_default()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::tests::make_post;

    #[test]
    fn test_empty_index_has_placeholder() {
        let config = SiteConfig::default();
        let index = render_index(&config, &[]);

        assert!(index.starts_with("# ThinkBlog\n\nWelcome to my blog!"));
        assert!(index.contains("## Latest Posts\n\n*No posts yet. Check back soon!*\n"));
        assert!(!index.contains("###"));
    }

    #[test]
    fn test_index_entries_in_given_order() {
        let config = SiteConfig::default();
        let mut first = make_post("first.md", Some("2024-06-01"));
        first.description = "Newest".into();
        let second = make_post("second.md", None);

        let index = render_index(&config, &[first, second]);

        let expected = "### [Title of first](./posts/first.md)\n*2024-06-01* — Newest\n\n\
                        ### [Title of second](./posts/second.md)\n\n";
        assert!(index.ends_with(expected), "got:\n{index}");
        assert!(!index.contains(NO_POSTS));
    }

    #[test]
    fn test_byline_parts() {
        let mut post = make_post("p.md", Some("2024-01-01"));
        assert_eq!(byline(&post).as_deref(), Some("*2024-01-01*"));

        post.description = "About".into();
        post.date = None;
        assert_eq!(byline(&post).as_deref(), Some(" — About"));

        post.description.clear();
        assert_eq!(byline(&post), None);
    }
}
