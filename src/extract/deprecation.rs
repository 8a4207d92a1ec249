// src/extract/deprecation.rs
// =============================================================================
// Deprecation marker scan.
//
// Schema pages print "This field is deprecated" next to deprecated arguments
// and fields. We lowercase the page text and grab the identifier that starts
// the same text run as that phrase. This is a best-effort heuristic: it can
// pick up an unrelated leading word, and nothing is checked against a schema.
// =============================================================================

use regex::Regex;
use scraper::Html;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::text::visible_text;

// `.` does not cross '\n', so identifier and phrase must share a text node
static DEPRECATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\b[a-z_][a-z0-9_]*\b).*?this field is deprecated")
        .expect("deprecation pattern is valid")
});

/// Returns the sorted, unique, lowercase identifiers marked deprecated.
pub fn extract_deprecations(document: &Html) -> Vec<String> {
    // Each text node ends up on its own line so words from neighbouring
    // elements never glue together
    let text = visible_text(document.root_element())
        .join(" \n")
        .to_lowercase();

    deprecated_identifiers(&text).into_iter().collect()
}

fn deprecated_identifiers(text: &str) -> BTreeSet<String> {
    DEPRECATED_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
