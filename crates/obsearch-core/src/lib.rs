//! obsearch - OpenBSD package index search
//!
//! Core library: mirror configuration, release/architecture validation,
//! cache path resolution and freshness policy, and the index record
//! scanner. The binary front-end lives in `obsearch-cli`.
//!
//! # Overview
//!
//! A search fetches the plaintext `index.txt` catalog for one
//! (release-or-snapshot, architecture) pair from a package mirror, caches
//! it under `~/.cache/obsearch/`, and scans it line by line for entries
//! matching a user regex. Release-mode indexes are immutable and fetched
//! once; snapshot indexes go stale after 24 hours.
//!
//! # Cache layout
//!
//! ```text
//! ~/.cache/obsearch/
//! ├── index-amd64-7.7.txt       # release-mode index
//! └── index-amd64-snapshot.txt  # rolling snapshot index
//! ```

pub mod arch;
pub mod config;
pub mod fetch;
pub mod index;
pub mod paths;
pub mod release;

pub use arch::Arch;
pub use config::MirrorConfig;
pub use fetch::{FetchError, fetch_index, index_url, should_fetch};
pub use index::{IndexError, IndexRecord, scan_file};
pub use release::{Channel, Release, ReleaseError};

/// User Agent string sent on every index fetch.
pub const USER_AGENT: &str = concat!("obsearch/", env!("CARGO_PKG_VERSION"));
