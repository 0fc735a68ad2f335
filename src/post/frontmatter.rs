//! Front matter extraction.
//!
//! A post may start with a block of single-line `key: value` pairs fenced by
//! `---` lines:
//!
//! ```md
//! ---
//! title: "Hello"
//! date: 2024-01-01
//! description: First post
//! ---
//! # Hello
//! ```
//!
//! Values are plain strings. There are no nested structures, multi-line values
//! or escapes; anything that does not fit the fence pattern is body text.

use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};

/// Opening fence line, lazily captured pairs, closing fence line, body.
static RE_FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n([\s\S]*)$").unwrap()
});

/// Parsed `key: value` pairs of a front matter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter(HashMap<String, String>);

impl FrontMatter {
    /// Value for `key`. Empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert_line(&mut self, line: &str) {
        // a colon at index 0 means there is no key
        let Some(colon) = line.find(':').filter(|&i| i > 0) else {
            return;
        };
        let key = line[..colon].trim();
        let value = strip_quotes(line[colon + 1..].trim());
        self.0.insert(key.to_owned(), value.to_owned());
    }
}

/// Split raw file text into its front matter and the remaining body.
///
/// Text without a well-formed block yields an empty [`FrontMatter`] and the
/// whole input as body.
pub fn parse_front_matter(text: &str) -> (FrontMatter, &str) {
    let Some(caps) = RE_FRONT_MATTER.captures(text) else {
        return (FrontMatter::default(), text);
    };
    let (Some(block), Some(body)) = (caps.get(1), caps.get(2)) else {
        return (FrontMatter::default(), text);
    };

    let mut front_matter = FrontMatter::default();
    for line in block.as_str().split('\n') {
        front_matter.insert_line(line);
    }
    (front_matter, body.as_str())
}

/// Drop one leading and one trailing quote character, independently.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}
