//! Post collection.
//!
//! Reads every `*.md` file of the posts directory into a [`Post`], filling in
//! missing metadata, and orders the result the way every generated file lists
//! posts: newest first.
//!
//! # Architecture
//!
//! ```text
//! read_posts(dir)
//!     │
//!     ├── markdown_files()      sorted by file name
//!     │
//!     ├── Post::from_source()   front matter + fallbacks, warns on gaps
//!     │
//!     └── sort_posts()          stable, compare_posts()
//! ```

pub mod frontmatter;

use crate::{
    log,
    utils::date::{DateTimeUtc, compare_dates},
};
use anyhow::{Context, Result};
use frontmatter::{FrontMatter, parse_front_matter};
use regex::Regex;
use std::{
    borrow::Cow,
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

const MARKDOWN_EXTENSION: &str = "md";

/// First level-one heading of a markdown body.
static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());

/// A blog post read from one markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    /// Front matter date, not validated
    pub date: Option<String>,
    pub description: String,
    /// File name without the `.md` extension
    pub slug: String,
    pub filename: String,
    /// Markdown body with front matter removed
    pub content: String,
}

impl Post {
    /// Build a post from a file name and its raw text.
    ///
    /// Logs a warning when the front matter has no `title` or no `date`.
    pub fn from_source(filename: &str, text: &str) -> Self {
        let (front_matter, body) = parse_front_matter(text);
        let slug = slug_from_filename(filename);

        let title = front_matter
            .get("title")
            .map(str::to_owned)
            .or_else(|| extract_title(body))
            .unwrap_or_else(|| slug.clone());

        for field in missing_metadata(&front_matter) {
            log!("warn"; "post {filename} missing {field} in front matter");
        }

        Self {
            title,
            date: front_matter.get("date").map(str::to_owned),
            description: front_matter
                .get("description")
                .unwrap_or_default()
                .to_owned(),
            slug,
            filename: filename.to_owned(),
            content: body.to_owned(),
        }
    }
}

/// Read all posts of `dir`, sorted newest first.
///
/// A missing directory is created and yields no posts.
pub fn read_posts(dir: &Path) -> Result<Vec<Post>> {
    if !dir.exists() {
        log!("posts"; "no posts directory found, creating {}", dir.display());
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create posts directory {}", dir.display()))?;
        return Ok(Vec::new());
    }

    let mut posts = markdown_files(dir)?
        .into_iter()
        .map(|(filename, path)| {
            let bytes =
                fs::read(&path).with_context(|| format!("Failed to read post {}", path.display()))?;
            let text = String::from_utf8_lossy(&bytes);
            if matches!(text, Cow::Owned(_)) {
                log!("warn"; "post {filename} is not valid UTF-8, invalid bytes replaced");
            }
            Ok(Post::from_source(&filename, &text))
        })
        .collect::<Result<Vec<_>>>()?;

    sort_posts(&mut posts);
    Ok(posts)
}

/// Sort posts in place with [`compare_posts`]. The sort is stable.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(compare_posts);
}

/// Newest first; dated before undated; undated by file name.
///
/// A date that does not parse is treated like a missing one.
pub fn compare_posts(a: &Post, b: &Post) -> Ordering {
    compare_dates(a.date.as_deref(), b.date.as_deref())
        .then_with(|| match (valid_date(a), valid_date(b)) {
            (false, false) => a.filename.cmp(&b.filename),
            _ => Ordering::Equal,
        })
}

fn valid_date(post: &Post) -> bool {
    post.date
        .as_deref()
        .and_then(DateTimeUtc::parse)
        .is_some()
}

/// `*.md` regular files of `dir` as `(file name, path)`, sorted by file name.
fn markdown_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION);
        if !is_markdown || !entry.file_type()?.is_file() {
            continue;
        }
        files.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Front matter fields a post should declare but does not.
fn missing_metadata(front_matter: &FrontMatter) -> Vec<&'static str> {
    ["title", "date"]
        .into_iter()
        .filter(|field| front_matter.get(field).is_none())
        .collect()
}

fn slug_from_filename(filename: &str) -> String {
    filename
        .strip_suffix(".md")
        .unwrap_or(filename)
        .to_owned()
}

/// Text of the first `# heading` line.
fn extract_title(body: &str) -> Option<String> {
    RE_HEADING
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
}
