//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "ThinkBlog".into()
    }

    pub fn description() -> String {
        "A clean, fast blog built with mdBook".into()
    }

    pub fn url() -> String {
        "https://thinh0.github.io/thinkblog/".into()
    }

    pub fn author() -> String {
        "Thinh Nguyen".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn source() -> PathBuf {
        "src".into()
    }

    pub fn posts() -> PathBuf {
        "src/posts".into()
    }

    pub fn index() -> PathBuf {
        "src/index.md".into()
    }

    pub fn summary() -> PathBuf {
        "src/SUMMARY.md".into()
    }

    pub fn feed() -> PathBuf {
        "feed.xml".into()
    }

    pub fn manifest() -> PathBuf {
        "src/posts/index.json".into()
    }

    pub fn feed_limit() -> usize {
        20
    }

    pub fn welcome() -> String {
        "Welcome to my blog! This is a clean, fast blog built with mdBook. \
         Here you'll find my latest thoughts, tutorials, and musings."
            .into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
