// src/output/persist.rs
// =============================================================================
// Writing pages and the manifest to disk.
//
// Layout under each output root:
//
//   {root}/index.json
//   {root}/{section}/{slug}.md
//
// A page path depends only on (root, section, slug), so re-running the crawl
// overwrites the same files.
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One line of index.json. Field order here is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub title: String,
    pub url: String,
    pub section: String,
    pub slug: String,
    pub deprecated: Vec<String>,
}

/// Where a page lands under `root`.
pub fn page_path(root: &Path, section: &str, slug: &str) -> PathBuf {
    root.join(section)
        .join(format!("{}.md", slug.trim_start_matches('/')))
}

/// Writes one page file and returns its path.
pub fn write_page(root: &Path, entry: &ManifestEntry, body: &str) -> Result<PathBuf> {
    let path = page_path(root, &entry.section, &entry.slug);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = format!("# {}\n\n_Source_: {}\n\n{}", entry.title, entry.url, body);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Writes the same pretty-printed manifest to `index.json` in every root.
pub fn write_manifest(roots: &[&Path], manifest: &[ManifestEntry]) -> Result<Vec<PathBuf>> {
    let json = serde_json::to_string_pretty(manifest)?;

    roots
        .iter()
        .map(|root| -> Result<PathBuf> {
            fs::create_dir_all(root)
                .with_context(|| format!("Failed to create {}", root.display()))?;
            let path = root.join("index.json");
            fs::write(&path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str) -> ManifestEntry {
        ManifestEntry {
            title: "User".to_string(),
            url: format!("https://docs.fireflies.ai/schema/{slug}"),
            section: "schema".to_string(),
            slug: slug.to_string(),
            deprecated: vec!["old_id".to_string()],
        }
    }

    #[test]
    fn test_page_path_mirrors_slug() {
        let path = page_path(Path::new("out"), "schema", "types/user");
        assert_eq!(path, Path::new("out/schema/types/user.md"));
        assert_eq!(
            page_path(Path::new("out"), "graphql-api", "index"),
            Path::new("out/graphql-api/index.md")
        );
    }

    #[test]
    fn test_write_page_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_page(dir.path(), &entry("types/user"), "<p>body</p>").unwrap();

        assert_eq!(path, dir.path().join("schema/types/user.md"));
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "# User\n\n_Source_: https://docs.fireflies.ai/schema/types/user\n\n<p>body</p>"
        );
    }

    #[test]
    fn test_write_page_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write_page(dir.path(), &entry("user"), "first").unwrap();
        let path = write_page(dir.path(), &entry("user"), "second").unwrap();
        assert!(fs::read_to_string(path).unwrap().ends_with("second"));
    }

    #[test]
    fn test_manifest_identical_in_every_root() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("nested/b");
        let manifest = vec![entry("user"), entry("meeting")];

        let paths = write_manifest(&[a.as_path(), b.as_path()], &manifest).unwrap();
        assert_eq!(paths.len(), 2);

        let first = fs::read(&paths[0]).unwrap();
        let second = fs::read(&paths[1]).unwrap();
        assert_eq!(first, second);

        let parsed: Vec<ManifestEntry> = serde_json::from_slice(&first).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_manifest_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let mut e = entry("user");
        e.title = "Überblick".to_string();
        e.deprecated.clear();

        let paths = write_manifest(&[dir.path()], &[e]).unwrap();
        let json = fs::read_to_string(&paths[0]).unwrap();
        assert_eq!(
            json,
            r#"[
  {
    "title": "Überblick",
    "url": "https://docs.fireflies.ai/schema/user",
    "section": "schema",
    "slug": "user",
    "deprecated": []
  }
]"#
        );
    }

    #[test]
    fn test_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_manifest(&[dir.path()], &[]).unwrap();
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "[]");
    }
}
