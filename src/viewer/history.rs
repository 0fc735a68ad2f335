//! Session history keyed on the query string.

use std::borrow::Cow;

/// A viewer location: the page's query parameters in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    params: Vec<(String, String)>,
}

impl Location {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self { params }
    }

    /// Location pointing at a single post.
    pub fn with_post(slug: &str) -> Self {
        Self::default().set("post", slug)
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `post` parameter, if present and non-empty.
    pub fn post(&self) -> Option<&str> {
        self.get("post").filter(|slug| !slug.is_empty())
    }

    /// Replace every `key` with a single `key=value`, keeping other parameters.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        match self.params.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                self.params[pos].1 = value.to_owned();
                let mut seen = 0;
                self.params.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.params.push((key.to_owned(), value.to_owned())),
        }
        self
    }

    /// Serialize back to `?a=b&c=d`, or an empty string without parameters.
    #[cfg(test)]
    pub fn query(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let pairs: Vec<_> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

/// Form-style decoding: `+` is a space, invalid escapes stay as written.
fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    decoded.unwrap_or(spaced)
}

/// Linear session history with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Push a new entry, dropping any forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor += 1;
    }

    /// Step back. Returns `false` at the first entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward. Returns `false` at the last entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    #[cfg(test)]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
