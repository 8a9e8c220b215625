//! obsearch - search the OpenBSD package index by regex

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use obsearch_cli::Cli;
use obsearch_cli::cmd::search::{self, SearchOptions};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("obsearch {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(err) = run(cli).await {
        eprintln!("[ERROR] {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let pattern = cli.package.context("a search pattern is required")?;
    search::search(SearchOptions {
        pattern,
        release: cli.release,
        snapshot: cli.snapshot,
        arch: cli.arch,
        force_fetch: cli.index,
        emoji: cli.emoji,
        mirror: cli.mirror,
    })
    .await
}
