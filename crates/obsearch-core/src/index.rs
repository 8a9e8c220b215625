//! Index record parsing and scanning.
//!
//! The mirror's `index.txt` is an `ls -l`-style listing, one package
//! archive per line. The column contract, split on whitespace:
//!
//! | token | field                                    |
//! |-------|------------------------------------------|
//! | 0     | permissions                              |
//! | 1     | link count                               |
//! | 2     | owner                                    |
//! | 3     | group                                    |
//! | 4     | size in bytes                            |
//! | 5-8   | month, day, time, year                   |
//! | 9..   | archive file name (may contain spaces)   |
//!
//! Lines that do not satisfy the contract are skipped, not fatal: the
//! listing carries directory headers and blank separators alongside the
//! package rows.

use std::io::BufRead;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

/// Bytes per megabyte, for display conversion.
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Errors raised while scanning the cached index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The cache file could not be opened or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One package entry from the index listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    /// Package name+version, archive suffix stripped (e.g. `foo-1.0`).
    pub name: String,
    /// Archive size in bytes.
    pub size_bytes: u64,
}

impl IndexRecord {
    /// Token index of the size field.
    pub const SIZE_COLUMN: usize = 4;
    /// First token index of the file name.
    pub const NAME_COLUMN: usize = 9;
    /// Archive suffix every package row carries.
    pub const ARCHIVE_SUFFIX: &'static str = ".tgz";

    /// Parse one listing line; None if the line is not a package row.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= Self::NAME_COLUMN {
            return None;
        }
        let size_bytes: u64 = tokens[Self::SIZE_COLUMN].parse().ok()?;
        let name = tokens[Self::NAME_COLUMN..]
            .join(" ")
            .strip_suffix(Self::ARCHIVE_SUFFIX)?
            .to_string();
        Some(Self { name, size_bytes })
    }

    /// Archive size in megabytes.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MB
    }
}

/// Scan a listing, returning the records whose name matches `pattern`.
///
/// The pattern is searched, not anchored, so it may match anywhere in the
/// name+version token. Matches come back in file order, unlimited and
/// unsorted.
pub fn scan<R: BufRead>(reader: R, pattern: &Regex) -> Result<Vec<IndexRecord>, IndexError> {
    let mut matches = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let Some(record) = IndexRecord::parse(&line) else {
            if !line.trim().is_empty() {
                tracing::debug!(line = %line, "skipping non-package index line");
            }
            continue;
        };
        if pattern.is_match(&record.name) {
            matches.push(record);
        }
    }
    Ok(matches)
}

/// Open the cached index file and scan it.
pub fn scan_file(path: &Path, pattern: &Regex) -> Result<Vec<IndexRecord>, IndexError> {
    let file = std::fs::File::open(path)?;
    scan(std::io::BufReader::new(file), pattern)
}
