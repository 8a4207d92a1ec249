// src/config.rs
// =============================================================================
// Crawl configuration.
//
// All crawl parameters live in one `Config` value that is handed to the crawl
// loop. `Config::default()` is the standard Fireflies docs crawl; the CLI
// builds one with overrides.
// =============================================================================

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

pub const DEFAULT_BASE_URL: &str = "https://docs.fireflies.ai";
// Any page that renders the full sidebar works as a seed
pub const DEFAULT_SEED: &str = "/graphql-api/query/transcripts";
pub const DEFAULT_USER_AGENT: &str = "fireflies-docs-scraper/1.0";
pub const DEFAULT_DELAY_MS: u64 = 350;
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

const RAW_ROOT: &str = "docs/fireflies";
const CLEAN_ROOT: &str = "docs/fireflies_clean";
const MD_ROOT: &str = "docs/fireflies_md";

/// A docs section: links starting with `prefix` are written under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub prefix: String,
    pub key: String,
}

impl Section {
    pub fn new(prefix: &str, key: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            key: key.to_string(),
        }
    }
}

/// The two sections we snapshot, in match priority order.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("/graphql-api/", "graphql-api"),
        Section::new("/schema/", "schema"),
    ]
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub seed: String,
    pub sections: Vec<Section>,
    /// Coarse extraction (whole `<main>`)
    pub raw_root: PathBuf,
    /// Best-container extraction
    pub clean_root: PathBuf,
    /// Best-container extraction converted to markdown
    pub md_root: PathBuf,
    pub delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    pub convert_markdown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_out_dir(Path::new("."))
    }
}

impl Config {
    /// Default crawl with the three output trees placed under `out_dir`.
    pub fn with_out_dir(out_dir: &Path) -> Self {
        Self {
            // The constant is a valid absolute URL
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            seed: DEFAULT_SEED.to_string(),
            sections: default_sections(),
            raw_root: out_dir.join(RAW_ROOT),
            clean_root: out_dir.join(CLEAN_ROOT),
            md_root: out_dir.join(MD_ROOT),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            convert_markdown: true,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base_url = Url::parse(&cli.base_url)
            .with_context(|| format!("Invalid base URL '{}'", cli.base_url))?;

        Ok(Self {
            base_url,
            seed: cli.seed.clone(),
            delay: Duration::from_millis(cli.delay_ms),
            timeout: Duration::from_secs(cli.timeout_secs),
            user_agent: cli.user_agent.clone(),
            convert_markdown: !cli.no_markdown,
            ..Self::with_out_dir(&cli.out_dir)
        })
    }

    /// The three output roots, in raw, clean, markdown order.
    pub fn output_roots(&self) -> [&Path; 3] {
        [&self.raw_root, &self.clean_root, &self.md_root]
    }

    /// Finds the first section whose prefix `link` starts with.
    pub fn section_for(&self, link: &str) -> Option<&Section> {
        self.sections.iter().find(|s| link.starts_with(&s.prefix))
    }
}
