//! Post manifest (`posts/index.json`) consumed by the viewer.

use super::write_output;
use crate::{config::SiteConfig, manifest::ManifestEntry, post::Post};
use anyhow::{Context, Result};

/// Write the manifest to `[build.manifest]`.
pub fn generate_manifest(config: &SiteConfig, posts: &[Post]) -> Result<()> {
    write_output("manifest", &config.build.manifest, &render_manifest(posts)?)
}

/// Pretty-printed JSON array of the posts' metadata, in the given order.
pub fn render_manifest(posts: &[Post]) -> Result<String> {
    let entries: Vec<ManifestEntry> = posts.iter().map(ManifestEntry::from).collect();
    let mut json = serde_json::to_string_pretty(&entries).context("Failed to serialize manifest")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::tests::make_post;

    #[test]
    fn test_manifest_keeps_order_and_metadata() {
        let mut first = make_post("first.md", Some("2024-06-01"));
        first.description = "Newest".into();
        first.content = "# Body is not exported".into();
        let second = make_post("second.md", None);

        let json = render_manifest(&[first, second]).unwrap();
        assert!(!json.contains("Body is not exported"));

        let entries: Vec<ManifestEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].slug, "first");
        assert_eq!(entries[0].description, "Newest");
        assert_eq!(entries[1].date, None);
    }

    #[test]
    fn test_empty_manifest_is_empty_array() {
        let json = render_manifest(&[]).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
