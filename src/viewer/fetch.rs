//! Resource loading for the viewer.
//!
//! The router only asks for paths relative to the site root (`posts/index.json`,
//! `posts/<slug>.md`). Where they come from is up to the [`Fetcher`]:
//!
//! - [`DirFetcher`]: files under a local directory
//! - [`HttpFetcher`]: plain HTTP GET below a base url

use std::{io::ErrorKind, path::PathBuf};
use thiserror::Error;

/// Why a resource could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
}

/// Loads text resources by site-relative path.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

// ============================================================================
// Local directory
// ============================================================================

/// Reads resources from a directory, as a static file server would serve them.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetcher for DirFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        if path.split('/').any(|segment| segment == "..") {
            return Err(FetchError::Status(403));
        }
        match tokio::fs::read_to_string(self.root.join(path)).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(FetchError::Status(404)),
            Err(err) => Err(FetchError::Network(err.to_string())),
        }
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// Fetches resources over HTTP relative to a base url.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    base: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Self {
        Self {
            base: format!("{}/", base.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    /// Absolute url of `path`, each segment percent-encoded.
    fn url(&self, path: &str) -> String {
        let encoded: Vec<_> = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}{}", self.base, encoded.join("/"))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dir_fetcher_reads_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("posts/hello.md"), "# Hello").unwrap();

        let fetcher = DirFetcher::new(dir.path());
        assert_eq!(fetcher.fetch("posts/hello.md").await.unwrap(), "# Hello");
    }

    #[tokio::test]
    async fn test_dir_fetcher_missing_file_is_404() {
        let dir = TempDir::new().unwrap();
        let fetcher = DirFetcher::new(dir.path());
        assert_eq!(
            fetcher.fetch("posts/missing.md").await,
            Err(FetchError::Status(404))
        );
    }

    #[tokio::test]
    async fn test_dir_fetcher_rejects_parent_segments() {
        let dir = TempDir::new().unwrap();
        let fetcher = DirFetcher::new(dir.path().join("site"));
        assert_eq!(
            fetcher.fetch("posts/../../secret.md").await,
            Err(FetchError::Status(403))
        );
    }

    #[test]
    fn test_http_url_encodes_segments() {
        let fetcher = HttpFetcher::new("http://localhost:5277/blog/");
        assert_eq!(
            fetcher.url("posts/hello world.md"),
            "http://localhost:5277/blog/posts/hello%20world.md"
        );
        assert_eq!(
            fetcher.url("posts/index.json"),
            "http://localhost:5277/blog/posts/index.json"
        );
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "request failed with status 404"
        );
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "connection refused"
        );
    }
}
