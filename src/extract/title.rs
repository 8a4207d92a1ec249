// src/extract/title.rs
// Page title: the first <h1> inside <main>, else the <title> element.

use scraper::{ElementRef, Html, Selector};

/// Returns the page title, or an empty string when the page has neither a
/// non-empty `<main> h1` nor a `<title>`.
pub fn extract_title(document: &Html) -> String {
    let main = Selector::parse("main").unwrap();
    let h1 = Selector::parse("h1").unwrap();
    let title = Selector::parse("title").unwrap();

    if let Some(main) = document.select(&main).next() {
        if let Some(heading) = main.select(&h1).next() {
            let text = stripped_text(heading);
            if !text.is_empty() {
                return text;
            }
        }
    }

    document
        .select(&title)
        .next()
        .map(stripped_text)
        .unwrap_or_default()
}

// Concatenates the trimmed text nodes, dropping empty ones
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
