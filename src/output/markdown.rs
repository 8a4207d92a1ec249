// src/output/markdown.rs
// =============================================================================
// HTML to Markdown conversion for the markdown output tree.
//
// Conversion is a capability: the crawl gets `Some(converter)` or `None`.
// With `None` (or when the converter errors) the cleaned HTML is written
// unchanged, so the markdown tree is never missing a page.
// =============================================================================

use anyhow::{Context, Result};
use htmd::options::{BulletListMarker, HeadingStyle, Options};
use htmd::HtmlToMarkdown;
use tracing::warn;

pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, html: &str) -> Result<String>;
}

/// Converter backed by the `htmd` crate: `#` headings and `-` bullets.
pub struct HtmdConverter;

impl MarkdownConverter for HtmdConverter {
    fn convert(&self, html: &str) -> Result<String> {
        // htmd always escapes literal `*` and `_`, there is no option for it
        let converter = HtmlToMarkdown::builder()
            .options(Options {
                heading_style: HeadingStyle::Atx,
                bullet_list_marker: BulletListMarker::Dash,
                ..Default::default()
            })
            .build();

        converter
            .convert(html)
            .context("htmd failed to convert page")
    }
}

/// Converts `html` to trimmed Markdown, or passes it through unchanged when
/// no converter is available or conversion fails.
pub fn html_to_markdown(html: &str, converter: Option<&dyn MarkdownConverter>) -> String {
    let Some(converter) = converter else {
        return html.to_string();
    };

    match converter.convert(html) {
        Ok(markdown) => markdown.trim().to_string(),
        Err(e) => {
            warn!(error = %e, "Markdown conversion failed, keeping HTML");
            html.to_string()
        }
    }
}
