//! obsearch - search the OpenBSD package index
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Binary front-end: argument parsing, orchestration, and terminal output.
//! All the actual behavior (validation, cache policy, fetching, scanning)
//! lives in `obsearch-core`.

pub mod cmd;
pub mod ui;

use clap::Parser;

use obsearch_core::config::{CURRENT_RELEASE, DEFAULT_MIRROR};
use obsearch_core::{Arch, Release};

#[derive(Debug, Parser)]
#[command(name = "obsearch")]
#[command(author, about = "Search the OpenBSD package index by regex")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Regex pattern matched against package name+version (e.g. 'vim', '^rsync-')
    #[arg(required_unless_present = "version")]
    pub package: Option<String>,

    /// Decorate each match with a glyph
    #[arg(short, long)]
    pub emoji: bool,

    /// Force a fresh index download even if a cached copy exists
    #[arg(short, long)]
    pub index: bool,

    /// Target release
    #[arg(short, long, default_value_t = CURRENT_RELEASE, conflicts_with = "snapshot")]
    pub release: Release,

    /// Search the rolling snapshot feed instead of a numbered release
    #[arg(short, long)]
    pub snapshot: bool,

    /// Target architecture
    #[arg(short, long, default_value_t = Arch::Amd64)]
    pub arch: Arch,

    /// Print name and version, then exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Package mirror base URL
    #[arg(long, env = "OBSEARCH_MIRROR", default_value = DEFAULT_MIRROR)]
    pub mirror: String,
}
