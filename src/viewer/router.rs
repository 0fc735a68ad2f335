//! Routing between the viewer's views.

use super::{
    AppState, SiteMeta, View,
    document::{Focus, PageMeta, PostView, Surface},
    fetch::Fetcher,
    history::{History, Location},
    list::{filter_posts, render_post_list},
    markdown::Markdown,
};
use crate::{
    log,
    manifest::{MANIFEST_PATH, ManifestEntry, post_path},
    post::frontmatter::parse_front_matter,
    utils::date::long_date,
};

const LOAD_POSTS_FAILED: &str = "Failed to load blog posts. Please try again later.";
const NOT_FOUND_TITLE: &str = "Post Not Found";
const NOT_FOUND_DESCRIPTION: &str = "The requested post could not be found.";
const ERROR_TITLE: &str = "Error";
const ERROR_DESCRIPTION: &str = "An error occurred while loading the content.";

/// Viewer state machine over an injected fetcher and surface.
pub struct Router<F: Fetcher, S: Surface> {
    fetcher: F,
    surface: S,
    markdown: Markdown,
    site: SiteMeta,
    history: History,
    state: AppState,
}

impl<F: Fetcher, S: Surface> Router<F, S> {
    pub fn new(
        fetcher: F,
        surface: S,
        markdown: Markdown,
        site: SiteMeta,
        location: Location,
    ) -> Self {
        Self {
            fetcher,
            surface,
            markdown,
            site,
            history: History::new(location),
            state: AppState::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Load the manifest, then route the current location.
    ///
    /// A manifest that cannot be fetched or parsed leaves the error view up
    /// and skips routing.
    pub async fn start(&mut self) {
        match self.load_posts().await {
            Ok(posts) => {
                self.state.posts = posts;
                self.handle_route().await;
            }
            Err(err) => {
                log!("error"; "failed to load {MANIFEST_PATH}: {err}");
                self.show_error(LOAD_POSTS_FAILED);
            }
        }
    }

    async fn load_posts(&self) -> Result<Vec<ManifestEntry>, String> {
        let json = self
            .fetcher
            .fetch(MANIFEST_PATH)
            .await
            .map_err(|err| err.to_string())?;
        serde_json::from_str(&json).map_err(|err| err.to_string())
    }

    /// Show the view the current location asks for.
    pub async fn handle_route(&mut self) {
        match self.history.current().post().map(str::to_owned) {
            Some(slug) => self.show_post_detail(&slug).await,
            None => self.show_post_list(),
        }
    }

    pub fn show_post_list(&mut self) {
        self.show(View::PostList);
        self.surface.set_post_list(render_post_list(&self.state.posts));
        self.surface.set_meta(page_meta(
            &self.site,
            &self.site.title,
            &self.site.description,
        ));
        self.surface.focus(Focus::SearchInput);
    }

    pub async fn show_post_detail(&mut self, slug: &str) {
        self.show(View::Loading);

        let Some(entry) = self.state.posts.iter().find(|p| p.slug == slug).cloned() else {
            self.show_not_found();
            return;
        };

        let markdown = match self.fetcher.fetch(&post_path(slug)).await {
            Ok(markdown) => markdown,
            Err(err) => {
                log!("error"; "failed to load post {slug}: {err}");
                self.show_error(&format!("Failed to load post: {err}"));
                return;
            }
        };

        let (_, body) = parse_front_matter(&markdown);
        self.surface.set_post(PostView {
            title: entry.title.clone(),
            date: long_date(entry.date.as_deref()),
            datetime: entry.date.clone().unwrap_or_default(),
            html: self.markdown.render(body),
        });
        self.show(View::PostDetail);
        self.surface
            .set_meta(page_meta(&self.site, &entry.title, &entry.description));
        self.surface.focus(Focus::PostTitle);
        self.surface.scroll_into_view(Focus::PostTitle);
    }

    pub fn show_not_found(&mut self) {
        self.show(View::NotFound);
        self.surface
            .set_meta(page_meta(&self.site, NOT_FOUND_TITLE, NOT_FOUND_DESCRIPTION));
    }

    pub fn show_error(&mut self, message: &str) {
        self.surface.set_error_message(message);
        self.show(View::Error);
        self.surface
            .set_meta(page_meta(&self.site, ERROR_TITLE, ERROR_DESCRIPTION));
    }

    /// Push `?post=<slug>` and route to it.
    pub async fn navigate_to_post(&mut self, slug: &str) {
        let location = self.history.current().clone().set("post", slug);
        self.history.push(location);
        self.handle_route().await;
    }

    /// Re-route the current history entry, as after a `popstate`.
    pub async fn pop_state(&mut self) {
        self.handle_route().await;
    }

    /// Step back in history. Returns `false` when already at the first entry.
    pub async fn back(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        self.pop_state().await;
        true
    }

    /// Step forward in history. Returns `false` when already at the last entry.
    pub async fn forward(&mut self) -> bool {
        if !self.history.forward() {
            return false;
        }
        self.pop_state().await;
        true
    }

    /// Re-render the post list with the posts matching `query`.
    pub fn search(&mut self, query: &str) {
        let matches = filter_posts(&self.state.posts, query);
        self.surface.set_post_list(render_post_list(matches));
    }

    fn show(&mut self, view: View) {
        self.state.view = view;
        self.surface.show(view);
    }
}

/// Page metadata for a view titled `title`.
fn page_meta(site: &SiteMeta, title: &str, description: &str) -> PageMeta {
    let document_title = if title == site.title {
        title.to_owned()
    } else {
        format!("{title} - {}", site.title)
    };
    PageMeta {
        document_title,
        description: description.to_owned(),
        og_title: title.to_owned(),
        og_description: description.to_owned(),
    }
}
