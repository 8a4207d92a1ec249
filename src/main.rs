// src/main.rs
// =============================================================================
// Entry point of docs-harvest.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info", written to stderr)
// 2. Parse command-line arguments into a crawl Config
// 3. Run the crawl with the HTTP page source and the htmd converter
// 4. Exit with 0 on success, 1 if anything failed
// =============================================================================

mod cli;
mod config;
mod crawl;
mod extract;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use output::{HtmdConverter, MarkdownConverter};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;

    let source = crawl::HttpSource::new(&config)?;
    let converter: Option<&dyn MarkdownConverter> = if config.convert_markdown {
        Some(&HtmdConverter)
    } else {
        None
    };

    info!(
        base = %config.base_url,
        seed = %config.seed,
        delay_ms = config.delay.as_millis() as u64,
        "Starting crawl"
    );

    let summary = crawl::crawl(&config, &source, converter).await?;

    info!(
        pages = summary.manifest.len(),
        skipped = summary.skipped.len(),
        "Crawl finished"
    );
    for path in &summary.manifest_paths {
        info!(path = %path.display(), "Manifest written");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary.manifest)?);
    }

    Ok(())
}
