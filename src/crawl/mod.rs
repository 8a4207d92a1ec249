// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the docs site.
//
// Features:
// - Seed-page link discovery scoped to the sidebar
// - Sequential fetching with a fixed politeness delay
// - Fetching behind a trait so the loop runs against in-memory pages in tests
// =============================================================================

mod fetch;
mod links;
mod run;

pub use fetch::HttpSource;
pub use run::crawl;
