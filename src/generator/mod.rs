//! Output generation.
//!
//! Every generator turns the sorted post list into exactly one file and can be
//! invoked on its own:
//!
//! | Generator  | Output (default path)   |
//! |------------|-------------------------|
//! | `index`    | `src/index.md`          |
//! | `summary`  | `src/SUMMARY.md`        |
//! | `rss`      | `feed.xml`              |
//! | `manifest` | `src/posts/index.json`  |
//!
//! [`generate_all`] runs them in that order and stops at the first error.

pub mod index;
pub mod manifest;
pub mod rss;
pub mod summary;

use crate::{config::SiteConfig, log, post::read_posts};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Read the posts and write every output file.
pub fn generate_all(config: &SiteConfig) -> Result<()> {
    log!("build"; "generating blog files...");

    let source = &config.build.source;
    fs::create_dir_all(source)
        .with_context(|| format!("Failed to create source directory {}", source.display()))?;

    let posts = read_posts(&config.build.posts)?;
    log!("build"; "found {} posts", posts.len());

    index::generate_index(config, &posts)?;
    summary::generate_summary(config, &posts)?;
    rss::generate_rss(config, &posts)?;
    manifest::generate_manifest(config, &posts)?;

    log!("build"; "blog files generated");
    Ok(())
}

/// Write `content` to `path`, creating parent directories, and log it.
fn write_output(module: &str, path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    log!(module; "{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestEntry;
    use tempfile::TempDir;

    fn make_config(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.update_path_with_root(root);
        config
    }

    #[test]
    fn test_generate_all_bootstraps_empty_site() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());

        generate_all(&config).unwrap();

        assert!(config.build.posts.is_dir());
        let index = fs::read_to_string(&config.build.index).unwrap();
        assert!(index.contains("*No posts yet. Check back soon!*"));
        let summary = fs::read_to_string(&config.build.summary).unwrap();
        assert!(summary.ends_with("- [Posts]()\n"));
        let feed = fs::read_to_string(&config.build.feed).unwrap();
        assert!(!feed.contains("<item>"));
        let manifest = fs::read_to_string(&config.build.manifest).unwrap();
        assert_eq!(manifest.trim(), "[]");
    }

    #[test]
    fn test_generate_all_with_posts() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        fs::create_dir_all(&config.build.posts).unwrap();
        fs::write(
            config.build.posts.join("older.md"),
            "---\ntitle: Older\ndate: 2024-01-01\n---\nold",
        )
        .unwrap();
        fs::write(
            config.build.posts.join("newer.md"),
            "---\ntitle: \"Newer\"\ndate: 2024-06-01\ndescription: Fresh\n---\nnew",
        )
        .unwrap();

        generate_all(&config).unwrap();

        let index = fs::read_to_string(&config.build.index).unwrap();
        let newer = index.find("[Newer](./posts/newer.md)").unwrap();
        let older = index.find("[Older](./posts/older.md)").unwrap();
        assert!(newer < older);
        assert!(index.contains("*2024-06-01* — Fresh"));

        let feed = fs::read_to_string(&config.build.feed).unwrap();
        assert_eq!(feed.matches("<item>").count(), 2);

        let manifest = fs::read_to_string(&config.build.manifest).unwrap();
        let entries: Vec<ManifestEntry> = serde_json::from_str(&manifest).unwrap();
        assert_eq!(entries[0].slug, "newer");

        // the manifest next to the posts must not be read back as a post
        generate_all(&config).unwrap();
        let summary = fs::read_to_string(&config.build.summary).unwrap();
        assert_eq!(summary.matches("  - [").count(), 2);
    }

    #[test]
    fn test_unwritable_target_aborts() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config(dir.path());
        // a directory where the index file should go
        fs::create_dir_all(&config.build.index).unwrap();
        config.build.feed = dir.path().join("feed.xml");

        assert!(generate_all(&config).is_err());
        assert!(!config.build.feed.exists());
    }
}
