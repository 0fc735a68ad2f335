//! View surface.
//!
//! [`Surface`] is everything the router may change on the page. [`Document`]
//! keeps that state in memory, one handle per view created up front, and can
//! print it as a static HTML page.

use super::View;
use crate::utils::html::escape_html;
use std::fmt::Write;

/// Focusable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    PostTitle,
}

/// Document title and the description/open graph meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub document_title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
}

/// A rendered post ready for the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostView {
    pub title: String,
    /// Human-readable date.
    pub date: String,
    /// Raw date for the `datetime` attribute.
    pub datetime: String,
    pub html: String,
}

/// Page mutations available to the router.
pub trait Surface {
    /// Make `view` the only visible view.
    fn show(&mut self, view: View);
    fn set_post_list(&mut self, html: String);
    fn set_post(&mut self, post: PostView);
    fn set_error_message(&mut self, message: &str);
    fn set_meta(&mut self, meta: PageMeta);
    fn focus(&mut self, target: Focus);
    fn scroll_into_view(&mut self, target: Focus);
}

/// A view's container element.
#[derive(Debug, Clone)]
struct ViewHandle {
    view: View,
    id: &'static str,
    visible: bool,
}

const fn element_id(view: View) -> &'static str {
    match view {
        View::Loading => "loading",
        View::PostList => "post-list-view",
        View::PostDetail => "post-detail-view",
        View::NotFound => "not-found-view",
        View::Error => "error-view",
    }
}

/// In-memory page.
#[derive(Debug, Clone)]
pub struct Document {
    language: String,
    views: Vec<ViewHandle>,
    post_list: String,
    post: PostView,
    error_message: String,
    meta: PageMeta,
    focused: Option<Focus>,
    scrolled_to: Option<Focus>,
}

impl Document {
    /// A page with only the loading view visible.
    pub fn new(language: &str) -> Self {
        let views = View::ALL
            .into_iter()
            .map(|view| ViewHandle {
                view,
                id: element_id(view),
                visible: view == View::Loading,
            })
            .collect();
        Self {
            language: language.to_owned(),
            views,
            post_list: String::new(),
            post: PostView::default(),
            error_message: String::new(),
            meta: PageMeta::default(),
            focused: None,
            scrolled_to: None,
        }
    }

    /// The visible view.
    #[cfg(test)]
    pub fn visible(&self) -> Option<View> {
        self.views.iter().find(|h| h.visible).map(|h| h.view)
    }

    #[cfg(test)]
    pub fn post_list(&self) -> &str {
        &self.post_list
    }

    #[cfg(test)]
    pub fn post(&self) -> &PostView {
        &self.post
    }

    #[cfg(test)]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[cfg(test)]
    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    #[cfg(test)]
    pub fn focused(&self) -> Option<Focus> {
        self.focused
    }

    #[cfg(test)]
    pub fn scrolled_to(&self) -> Option<Focus> {
        self.scrolled_to
    }

    /// Static HTML snapshot of the page.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        let meta = &self.meta;
        let _ = write!(
            out,
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{og_title}">
<meta property="og:description" content="{og_description}">
</head>
<body>
"#,
            lang = escape_html(&self.language),
            title = escape_html(&meta.document_title),
            description = escape_html(&meta.description),
            og_title = escape_html(&meta.og_title),
            og_description = escape_html(&meta.og_description),
        );

        for handle in &self.views {
            let hidden = if handle.visible { "" } else { " hidden" };
            let _ = writeln!(out, r#"<section id="{}"{hidden}>"#, handle.id);
            out.push_str(&self.view_body(handle.view));
            out.push_str("</section>\n");
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn view_body(&self, view: View) -> String {
        match view {
            View::Loading => "<p>Loading...</p>\n".to_string(),
            View::PostList => format!(
                r#"<input id="search-input" type="search" placeholder="Search posts..."{autofocus}>
<div id="post-list">
{list}</div>
"#,
                autofocus = self.autofocus(Focus::SearchInput),
                list = self.post_list,
            ),
            View::PostDetail => format!(
                r#"<article>
<h1 id="post-title" tabindex="-1"{autofocus}>{title}</h1>
<time id="post-date" datetime="{datetime}">{date}</time>
<div id="post-content">
{content}</div>
</article>
"#,
                autofocus = self.autofocus(Focus::PostTitle),
                title = escape_html(&self.post.title),
                datetime = escape_html(&self.post.datetime),
                date = escape_html(&self.post.date),
                content = self.post.html,
            ),
            View::NotFound => {
                "<h1>Post Not Found</h1>\n<p>The requested post could not be found.</p>\n"
                    .to_string()
            }
            View::Error => format!(
                "<h1>Error</h1>\n<p id=\"error-message\">{}</p>\n",
                escape_html(&self.error_message)
            ),
        }
    }

    fn autofocus(&self, target: Focus) -> &'static str {
        if self.focused == Some(target) {
            " autofocus"
        } else {
            ""
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Surface for Document {
    fn show(&mut self, view: View) {
        for handle in &mut self.views {
            handle.visible = handle.view == view;
        }
    }

    fn set_post_list(&mut self, html: String) {
        self.post_list = html;
    }

    fn set_post(&mut self, post: PostView) {
        self.post = post;
    }

    fn set_error_message(&mut self, message: &str) {
        self.error_message = message.to_owned();
    }

    fn set_meta(&mut self, meta: PageMeta) {
        self.meta = meta;
    }

    fn focus(&mut self, target: Focus) {
        self.focused = Some(target);
    }

    fn scroll_into_view(&mut self, target: Focus) {
        self.scrolled_to = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_shows_loading() {
        let document = Document::default();
        assert_eq!(document.visible(), Some(View::Loading));
        assert_eq!(document.focused(), None);
    }

    #[test]
    fn test_show_is_exclusive() {
        let mut document = Document::default();
        for view in View::ALL {
            document.show(view);
            assert_eq!(document.visible(), Some(view));
            assert_eq!(document.views.iter().filter(|h| h.visible).count(), 1);
        }
    }

    #[test]
    fn test_snapshot_hides_inactive_views() {
        let mut document = Document::new("de");
        document.show(View::Error);
        document.set_error_message("Failed <here>");
        document.set_meta(PageMeta {
            document_title: "Error - Blog".into(),
            description: "d".into(),
            og_title: "Error".into(),
            og_description: "d".into(),
        });

        let html = document.to_html();
        assert!(html.contains(r#"<html lang="de">"#));
        assert!(html.contains("<title>Error - Blog</title>"));
        assert!(html.contains(r#"<section id="error-view">"#));
        assert!(html.contains(r#"<section id="loading" hidden>"#));
        assert!(html.contains(r#"<section id="post-list-view" hidden>"#));
        assert!(html.contains("Failed &lt;here&gt;"));
    }

    #[test]
    fn test_snapshot_marks_focus() {
        let mut document = Document::default();
        document.show(View::PostDetail);
        document.set_post(PostView {
            title: "Hello".into(),
            date: "January 1, 2024".into(),
            datetime: "2024-01-01".into(),
            html: "<p>body</p>".into(),
        });
        document.focus(Focus::PostTitle);

        let html = document.to_html();
        assert!(html.contains(r#"<h1 id="post-title" tabindex="-1" autofocus>Hello</h1>"#));
        assert!(html.contains(r#"<time id="post-date" datetime="2024-01-01">January 1, 2024</time>"#));
        assert!(html.contains("<p>body</p>"));
    }
}
