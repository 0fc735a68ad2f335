//! Markdown to HTML for the post detail view.

use crate::utils::html::escape_html;
use pulldown_cmark::{Options, Parser, html};

type RenderFn = Box<dyn Fn(&str) -> String>;

/// An optional markdown renderer.
///
/// Without a renderer, content is shown verbatim inside an escaped `<pre>` block.
pub struct Markdown(Option<RenderFn>);

impl Markdown {
    /// No renderer installed.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Use a custom renderer.
    pub fn with(render: impl Fn(&str) -> String + 'static) -> Self {
        Self(Some(Box::new(render)))
    }

    /// CommonMark with tables, footnotes, strikethrough and task lists.
    pub fn cmark() -> Self {
        Self::with(render_cmark)
    }

    pub fn render(&self, markdown: &str) -> String {
        match &self.0 {
            Some(render) => render(markdown),
            None => format!("<pre>{}</pre>", escape_html(markdown)),
        }
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::cmark()
    }
}

fn render_cmark(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}
