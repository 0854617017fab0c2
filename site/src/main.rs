//! # zartex-site
//!
//! Static site exporter for the ZARTEX landing page.
//!
//! Renders the page with Leptos SSR and publishes a self-contained tree:
//! `index.html` with the stylesheet inlined, the image assets, and a
//! build manifest describing the run.
//!
//! ## Usage
//!
//! ```bash
//! # Publish into ./dist with the bundled images
//! zartex-site
//!
//! # Publish somewhere else
//! zartex-site --out-dir /srv/www/zartex --assets-dir assets
//! ```

mod export;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use zartex_pages::types::HomeContent;

#[derive(Parser, Debug)]
#[command(name = "zartex-site")]
#[command(about = "Static site exporter for the ZARTEX landing page")]
#[command(version)]
struct Args {
    /// Directory the published site is written to
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// Directory holding the image files the page references
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging - write to stderr, stdout stays clean for scripting
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting zartex-site v{}", env!("CARGO_PKG_VERSION"));
    info!("Output: {:?}", args.out_dir);

    let content = HomeContent::default();
    let summary = export::export_site(&content, &args.assets_dir, &args.out_dir)
        .with_context(|| format!("exporting site to {}", args.out_dir.display()))?;

    info!(
        "Done: {} artifacts, {} asset files, index.html is {} bytes",
        summary.created.len(),
        summary.assets_published,
        summary.html_bytes
    );
    for artifact in &summary.created {
        info!("  {}", artifact);
    }

    Ok(())
}
