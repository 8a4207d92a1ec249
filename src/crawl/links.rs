// src/crawl/links.rs
// =============================================================================
// Link discovery from the seed page.
//
// The docs sidebar (<aside>) lists every page of every section, so one seed
// page is enough to find them all. Links are kept exactly as written in the
// href: a query string or #fragment makes a different link, even if it points
// at a page we already have.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::BTreeSet;

use crate::config::Section;

/// Collects hrefs under the first `<aside>` (or the whole page when there is
/// none) that start with one of the section prefixes.
///
/// Returns: sorted, duplicate-free relative paths
pub fn discover_links(html: &str, sections: &[Section]) -> Vec<String> {
    let document = Html::parse_document(html);
    let aside = Selector::parse("aside").unwrap();
    let anchors = Selector::parse("a[href]").unwrap();

    let scope = document
        .select(&aside)
        .next()
        .unwrap_or_else(|| document.root_element());

    let links: BTreeSet<String> = scope
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| sections.iter().any(|s| href.starts_with(&s.prefix)))
        .map(str::to_string)
        .collect();

    links.into_iter().collect()
}
