// src/extract/content.rs
// =============================================================================
// Main content extraction.
//
// Two passes over the same page:
//
// - coarse: the whole <main> landmark with nav/header/footer/aside removed
// - clean:  the best-scoring container inside <main>, with scripts, styles
//           and layout chrome removed, returned without a wrapper tag
//
// Both passes rewrite <pre> blocks into fenced code (see code.rs). Neither
// pass can fail: a page without <main> is processed as a whole document.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

use super::serialize::Serializer;
use super::text::visible_text;

// Removed by the coarse pass
const COARSE_STRIP: &[&str] = &["aside", "nav", "header", "footer"];

// Removed by the clean pass
const CLEAN_STRIP: &[&str] = &[
    "script", "style", "link", "header", "footer", "nav", "aside", "noscript", "iframe",
];

// <div> ids that are layout, never content
const LAYOUT_IDS: &[&str] = &["navbar", "sidebar", "sidebar-content"];

/// Serializes the `<main>` element (tag included) minus navigation chrome,
/// or the whole document when there is no `<main>`.
pub fn extract_content_from(document: &Html) -> String {
    let mut ser = Serializer::new(COARSE_STRIP);
    match main_landmark(document) {
        Some(main) => ser.element(main),
        None => ser.document(document),
    }
    ser.finish()
}

/// Serializes the children of the best content container, without the
/// container's own tag.
pub fn extract_content_clean_from(document: &Html) -> String {
    let content = find_best_content_container(document);
    let mut ser = Serializer::new(CLEAN_STRIP);
    ser.children(content);
    ser.finish()
}

/// Picks the element that most looks like the page body.
///
/// Every `article`, `section` and `div` under `<main>` is scored as
/// `5 * headings + 3 * code blocks + min(text_len / 800, 5)`. The highest
/// score wins and ties keep the earliest element in document order. When
/// there are no candidates the landmark itself is returned.
pub fn find_best_content_container(document: &Html) -> ElementRef<'_> {
    let landmark = main_landmark(document).unwrap_or_else(|| document.root_element());

    // Constant selectors, parsing cannot fail
    let candidates = Selector::parse("article, section, div").unwrap();
    let headings = Selector::parse("h1, h2, h3, h4").unwrap();
    let code_blocks = Selector::parse("pre, code").unwrap();

    let mut best = landmark;
    let mut best_score: i64 = -1;

    for element in landmark.select(&candidates) {
        if is_layout_container(element) {
            continue;
        }

        let score = score_container(element, &headings, &code_blocks);
        // Strictly greater: on a tie the earlier element stays
        if score > best_score {
            best_score = score;
            best = element;
        }
    }

    best
}

fn main_landmark(document: &Html) -> Option<ElementRef<'_>> {
    let main = Selector::parse("main").unwrap();
    document.select(&main).next()
}

fn is_layout_container(element: ElementRef<'_>) -> bool {
    if element.value().name() != "div" {
        return false;
    }
    let id = element.value().id().unwrap_or("").to_lowercase();
    LAYOUT_IDS.iter().any(|layout| *layout == id)
}

fn score_container(element: ElementRef<'_>, headings: &Selector, code_blocks: &Selector) -> i64 {
    let heading_count = element.select(headings).count() as i64;
    let code_count = element.select(code_blocks).count() as i64;
    let text_len = visible_text(element).join(" ").chars().count() as i64;

    heading_count * 5 + code_count * 3 + (text_len / 800).min(5)
}
