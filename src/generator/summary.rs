//! Table of contents (`SUMMARY.md`).

use super::write_output;
use crate::{config::SiteConfig, post::Post};
use anyhow::Result;
use std::fmt::Write;

const HEADER: &str = "# Summary\n\n- [Home](index.md)\n- [Posts]()\n";

/// Write the table of contents to `[build.summary]`.
pub fn generate_summary(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    write_output("summary", &config.build.summary, &render_summary(posts))
}

/// Fixed home/posts header followed by one nested link per post.
pub fn render_summary(posts: &[Post]) -> String {
    let mut content = String::from(HEADER);
    for post in posts {
        writeln!(content, "  - [{}](posts/{}.md)", post.title, post.slug).ok();
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::tests::make_post;

    #[test]
    fn test_empty_summary_is_header_only() {
        assert_eq!(render_summary(&[]), HEADER);
    }

    #[test]
    fn test_summary_lists_posts_indented() {
        let posts = [make_post("b.md", Some("2024-02-02")), make_post("a.md", None)];
        assert_eq!(
            render_summary(&posts),
            "# Summary\n\n- [Home](index.md)\n- [Posts]()\n  \
             - [Title of b](posts/b.md)\n  - [Title of a](posts/a.md)\n"
        );
    }
}
