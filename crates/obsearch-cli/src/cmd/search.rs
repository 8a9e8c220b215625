//! Search command

use std::time::SystemTime;

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use regex::Regex;
use reqwest::Client;

use obsearch_core::{Arch, Channel, MirrorConfig, Release, fetch, index, paths};

use crate::ui;

/// Options for one search invocation.
#[derive(Debug)]
pub struct SearchOptions {
    /// User regex pattern.
    pub pattern: String,
    /// Target release (ignored in snapshot mode).
    pub release: Release,
    /// Search the rolling snapshot feed.
    pub snapshot: bool,
    /// Target architecture.
    pub arch: Arch,
    /// Force a fresh index download.
    pub force_fetch: bool,
    /// Decorate match rows with a glyph.
    pub emoji: bool,
    /// Mirror base URL.
    pub mirror: String,
}

/// Fetch the index if the cache policy demands it, then scan and print
/// every matching entry in file order.
pub async fn search(opts: SearchOptions) -> Result<()> {
    let config = MirrorConfig::with_mirror(&opts.mirror);

    let pattern = Regex::new(&opts.pattern)
        .with_context(|| format!("invalid search pattern '{}'", opts.pattern))?;

    let channel = if opts.snapshot {
        Channel::Snapshot
    } else {
        config.validate_release(opts.release)?;
        Channel::Release(opts.release)
    };

    let cache_dir = paths::try_cache_home()
        .context("could not determine home directory; set OBSEARCH_CACHE to override")?;
    paths::ensure_cache_dir(&cache_dir)
        .with_context(|| format!("failed to create cache directory {}", cache_dir.display()))?;
    let index_file = paths::index_path(&cache_dir, opts.arch, &channel);

    let mtime = fetch::cache_mtime(&index_file);
    if fetch::should_fetch(
        &channel,
        opts.force_fetch,
        mtime,
        SystemTime::now(),
        config.max_snapshot_age,
    ) {
        let url = fetch::index_url(&config, &channel, opts.arch);
        let client = Client::new();
        fetch::fetch_index(&client, &url, &index_file)
            .await
            .context("failed to download package index")?;
    } else {
        tracing::debug!(path = %index_file.display(), "using cached index");
    }

    println!("{}", ui::banner(&opts.pattern, &channel, opts.arch).dim());

    let matches = index::scan_file(&index_file, &pattern)
        .with_context(|| format!("failed to read index {}", index_file.display()))?;

    if matches.is_empty() {
        println!(
            "  No packages found matching '{}'",
            opts.pattern.as_str().white()
        );
        return Ok(());
    }

    for record in &matches {
        println!("{}", ui::format_row(record, opts.emoji));
    }

    Ok(())
}
