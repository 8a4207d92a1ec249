// src/crawl/run.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Fetch the seed page and discover section links from its sidebar
// 2. Make sure the seed itself is in the list
// 3. For each link, once: wait, fetch, extract, write three page files.
//    A link outside every section is still fetched, then skipped
// 4. Write index.json to all three output roots
//
// Pages are fetched one at a time with a fixed pause before each request.
// Any fetch error ends the run; the manifest is only written after every
// page succeeded, so an aborted run leaves page files but no index.json.
// =============================================================================

use anyhow::{Context, Result};
use scraper::Html;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

use super::fetch::PageSource;
use super::links::discover_links;
use crate::config::Config;
use crate::extract::{
    extract_content_clean_from, extract_content_from, extract_deprecations, extract_title,
};
use crate::output::{
    html_to_markdown, write_manifest, write_page, ManifestEntry, MarkdownConverter,
};

/// What a finished crawl produced.
#[derive(Debug)]
pub struct RunSummary {
    pub manifest: Vec<ManifestEntry>,
    /// Links that were fetched but matched no section, so nothing was written
    pub skipped: Vec<String>,
    pub manifest_paths: Vec<PathBuf>,
}

pub async fn crawl(
    config: &Config,
    source: &dyn PageSource,
    converter: Option<&dyn MarkdownConverter>,
) -> Result<RunSummary> {
    let seed_url = config
        .base_url
        .join(&config.seed)
        .with_context(|| format!("Invalid seed path '{}'", config.seed))?;

    info!(url = %seed_url, "Fetching seed page");
    let seed_html = source.fetch(&seed_url).await?;

    let mut links = discover_links(&seed_html, &config.sections);
    debug!(count = links.len(), "Discovered section links");
    if !links.contains(&config.seed) {
        links.push(config.seed.clone());
    }

    let mut manifest = Vec::new();
    let mut skipped = Vec::new();
    let mut seen = HashSet::new();

    for link in links {
        if !seen.insert(link.clone()) {
            continue;
        }

        let url = config
            .base_url
            .join(&link)
            .with_context(|| format!("Invalid link '{link}'"))?;

        tokio::time::sleep(config.delay).await;
        let html = source.fetch(&url).await?;

        let Some(section) = config.section_for(&link) else {
            debug!(link = %link, "No section matches, skipping");
            skipped.push(link);
            continue;
        };

        // One parse feeds every extraction pass
        let (entry, raw, clean) = {
            let document = Html::parse_document(&html);
            let entry = ManifestEntry {
                title: page_title(extract_title(&document), &link),
                url: url.to_string(),
                section: section.key.clone(),
                slug: slug_for(&link, &section.prefix),
                deprecated: extract_deprecations(&document),
            };
            (
                entry,
                extract_content_from(&document),
                extract_content_clean_from(&document),
            )
        };

        let markdown = html_to_markdown(&clean, converter);

        write_page(&config.raw_root, &entry, &raw)?;
        write_page(&config.clean_root, &entry, &clean)?;
        write_page(&config.md_root, &entry, &markdown)?;

        info!(
            section = %entry.section,
            slug = %entry.slug,
            deprecated = entry.deprecated.len(),
            "Saved page"
        );
        manifest.push(entry);
    }

    let manifest_paths = write_manifest(&config.output_roots(), &manifest)?;
    info!(pages = manifest.len(), skipped = skipped.len(), "Wrote manifest");

    Ok(RunSummary {
        manifest,
        skipped,
        manifest_paths,
    })
}

// Path below the section prefix, "index" for the section root
fn slug_for(link: &str, prefix: &str) -> String {
    let slug = link
        .strip_prefix(prefix)
        .unwrap_or(link)
        .trim_end_matches('/');
    if slug.is_empty() {
        "index".to_string()
    } else {
        slug.to_string()
    }
}

fn page_title(extracted: String, link: &str) -> String {
    if !extracted.is_empty() {
        return extracted;
    }
    let from_path = link.trim_matches('/');
    if from_path.is_empty() {
        "index".to_string()
    } else {
        from_path.to_string()
    }
}
