// src/extract/text.rs
// =============================================================================
// Visible page text.
//
// `ElementRef::text()` also yields the contents of <script>, <style> and
// friends. Docs sites embed the whole page again as JSON inside a script, so
// anything that measures or scans page text goes through here instead.
// =============================================================================

use scraper::{ElementRef, Node};

// Their text never renders
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template", "noscript"];

/// Text nodes under `element` in document order, skipping hidden subtrees.
pub(crate) fn visible_text(element: ElementRef<'_>) -> Vec<&str> {
    let mut texts = Vec::new();
    collect(element, &mut texts);
    texts
}

fn collect<'a>(element: ElementRef<'a>, texts: &mut Vec<&'a str>) {
    let name = element.value().name();
    if HIDDEN_ELEMENTS.iter().any(|hidden| *hidden == name) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => texts.push(&**text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect(child, texts);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_hidden_subtrees_skipped() {
        let document = Html::parse_document(
            r#"<html><head><title>T</title><style>p { color: red }</style></head>
            <body><p>one</p><script>var x = "two";</script><noscript>three</noscript><p>four</p></body></html>"#,
        );
        let text = visible_text(document.root_element()).concat();
        assert!(text.contains("one"));
        assert!(text.contains("four"));
        assert!(text.contains('T'));
        assert!(!text.contains("color"));
        assert!(!text.contains("two"));
        assert!(!text.contains("three"));
    }

    #[test]
    fn test_document_order_kept() {
        let document = Html::parse_fragment("<div><p>a</p><span>b<em>c</em></span>d</div>");
        let texts = visible_text(document.root_element());
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_hidden_root_yields_nothing() {
        let document = Html::parse_document("<script>x</script>");
        let selector = scraper::Selector::parse("script").unwrap();
        let script = document.select(&selector).next().unwrap();
        assert!(visible_text(script).is_empty());
    }
}
