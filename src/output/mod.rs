// src/output/mod.rs
// =============================================================================
// Output side of the pipeline: Markdown conversion and the file writers for
// the three snapshot trees.
// =============================================================================

mod markdown;
mod persist;

pub use markdown::{html_to_markdown, HtmdConverter, MarkdownConverter};
pub use persist::{write_manifest, write_page, ManifestEntry};
