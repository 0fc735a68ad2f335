//! Post list rendering and search filtering.

use crate::{
    manifest::ManifestEntry,
    utils::{
        date::{compare_dates, long_date},
        html::escape_html,
    },
};

/// Shown in place of the list when nothing matches.
pub const NO_RESULTS: &str = r#"<p class="no-results">No posts found.</p>"#;

/// Render post cards, newest first.
pub fn render_post_list<'a>(posts: impl IntoIterator<Item = &'a ManifestEntry>) -> String {
    let mut posts: Vec<_> = posts.into_iter().collect();
    if posts.is_empty() {
        return NO_RESULTS.to_string();
    }
    posts.sort_by(|a, b| compare_dates(a.date.as_deref(), b.date.as_deref()));
    posts.into_iter().map(render_card).collect()
}

fn render_card(post: &ManifestEntry) -> String {
    let date = post.date.as_deref();
    format!(
        r#"<article class="post-card">
<h2 class="post-card-title"><a href="?post={href}" data-slug="{slug}">{title}</a></h2>
<time class="post-card-date" datetime="{datetime}">{long_date}</time>
<p class="post-card-description">{description}</p>
</article>
"#,
        href = urlencoding::encode(&post.slug),
        slug = escape_html(&post.slug),
        title = escape_html(&post.title),
        datetime = escape_html(date.unwrap_or_default()),
        long_date = long_date(date),
        description = escape_html(&post.description),
    )
}

/// Posts whose title or description contains `query`, ignoring case and
/// surrounding whitespace. An empty query matches everything.
pub fn filter_posts<'a>(posts: &'a [ManifestEntry], query: &str) -> Vec<&'a ManifestEntry> {
    let query = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&query)
                || post.description.to_lowercase().contains(&query)
        })
        .collect()
}
