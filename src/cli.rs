// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag has a default that matches the built-in crawl target (the
// Fireflies GraphQL docs), so running `docs-harvest` with no arguments does
// the standard crawl. Flags exist so tests and other doc sites can be pointed
// at without editing constants.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_DELAY_MS, DEFAULT_SEED, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

#[derive(Parser, Debug)]
#[command(
    name = "docs-harvest",
    version = "0.1.0",
    about = "Snapshot the GraphQL API and Schema sections of a docs site",
    long_about = "docs-harvest reads the sidebar of one seed page, fetches every linked page under \
                  the configured sections, and writes raw, cleaned and markdown snapshots plus an \
                  index.json manifest into three parallel output trees."
)]
pub struct Cli {
    /// Site root that relative doc links are joined onto
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Seed page whose sidebar lists every page to fetch
    #[arg(long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Directory that holds the docs/fireflies* output trees
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Pause before each page fetch, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Skip HTML to Markdown conversion (the markdown tree gets cleaned HTML)
    #[arg(long)]
    pub no_markdown: bool,

    /// Also print the manifest as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["docs-harvest"]);
        assert_eq!(cli.base_url, "https://docs.fireflies.ai");
        assert_eq!(cli.seed, "/graphql-api/query/transcripts");
        assert_eq!(cli.delay_ms, 350);
        assert_eq!(cli.timeout_secs, 20);
        assert!(!cli.no_markdown);
        assert!(!cli.json);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "docs-harvest",
            "--base-url",
            "http://localhost:8080",
            "--delay-ms",
            "0",
            "--no-markdown",
        ]);
        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(cli.delay_ms, 0);
        assert!(cli.no_markdown);
    }
}
