// src/extract/code.rs
// =============================================================================
// Turns syntax-highlighted <pre> blocks back into fenced code blocks.
//
// Doc sites like Mintlify render code as:
//
//   <pre><code class="language-graphql">
//     <span class="line">query {</span>
//     <span class="line">  user { id }</span>
//     ...
//
// Each source line gets its own element, so the raw text has no newlines.
// We join the line elements with '\n' and wrap the result in a ``` fence
// tagged with the language from the `language-*` class.
// =============================================================================

use scraper::{ElementRef, Selector};

/// Renders a `<pre>` element as a fenced code block.
///
/// The result is surrounded by newlines so it stays separated from
/// neighbouring markup when written back into HTML.
pub fn fence_pre(pre: ElementRef<'_>) -> String {
    let code_selector = Selector::parse("code").unwrap();

    let Some(code) = pre.select(&code_selector).next() else {
        // No <code> inside, take the <pre> text as-is
        let text = pre.text().collect::<Vec<_>>().join("\n");
        return format!("\n```\n{}\n```\n", text.trim());
    };

    let line_selector = Selector::parse(".line").unwrap();
    let lines: Vec<String> = code
        .select(&line_selector)
        .map(|line| line.text().collect::<String>())
        .collect();

    let text = if lines.is_empty() {
        code.text().collect::<Vec<_>>().join("\n")
    } else {
        lines.join("\n")
    };

    format!("\n```{}\n{}\n```\n", language_of(code), text.trim())
}

// Reads the language from the first `language-X` class, or "" if none.
// The class attribute is read directly so class order is the source order.
fn language_of(code: ElementRef<'_>) -> &str {
    code.value()
        .attr("class")
        .unwrap_or("")
        .split_whitespace()
        .find_map(|class| class.strip_prefix("language-"))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn fence(html: &str) -> String {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("pre").unwrap();
        fence_pre(document.select(&selector).next().unwrap())
    }

    #[test]
    fn test_line_spans_joined() {
        let html = r#"<pre><code class="language-graphql"><span class="line">query {</span><span class="line">  user { id }</span><span class="line">}</span></code></pre>"#;
        assert_eq!(fence(html), "\n```graphql\nquery {\n  user { id }\n}\n```\n");
    }

    #[test]
    fn test_code_without_lines_uses_text() {
        let html = r#"<pre><code class="hljs language-json">  {"a": 1}  </code></pre>"#;
        assert_eq!(fence(html), "\n```json\n{\"a\": 1}\n```\n");
    }

    #[test]
    fn test_no_language_class() {
        let html = r#"<pre><code class="hljs">curl -X POST</code></pre>"#;
        assert_eq!(fence(html), "\n```\ncurl -X POST\n```\n");
    }

    #[test]
    fn test_pre_without_code() {
        let html = "<pre>\n  plain text block\n</pre>";
        assert_eq!(fence(html), "\n```\nplain text block\n```\n");
    }

    #[test]
    fn test_first_language_class_wins() {
        let html = r#"<pre><code class="language-bash language-sh">ls</code></pre>"#;
        assert_eq!(fence(html), "\n```bash\nls\n```\n");
    }
}
