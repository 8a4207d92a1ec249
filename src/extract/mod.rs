// src/extract/mod.rs
// =============================================================================
// Everything that reads a fetched page: title, main content (two passes),
// fenced code reconstruction and deprecation markers.
//
// All functions here are pure: they take a parsed `scraper::Html` (or an HTML
// string) and never touch the network or the filesystem.
// =============================================================================

mod code;
mod content;
mod deprecation;
mod serialize;
mod text;
mod title;

pub use content::{extract_content_clean_from, extract_content_from};
pub use deprecation::extract_deprecations;
pub use title::extract_title;
