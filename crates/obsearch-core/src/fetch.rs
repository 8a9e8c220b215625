//! Index fetching: freshness policy, URL construction, and download.
//!
//! Handles the single GET that replaces the cached index wholesale. No
//! retries, no ranges, no verification beyond the HTTP status: the index
//! is small and release artifacts are immutable.

use std::path::Path;
use std::time::{Duration, SystemTime};

use futures::StreamExt;
use reqwest::Client;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::arch::Arch;
use crate::config::MirrorConfig;
use crate::release::Channel;

/// Errors from the fetch path. All of them are fatal to the invocation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Writing the cache file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The mirror answered with a non-success status.
    #[error("mirror returned HTTP {status} for {url}")]
    Status {
        /// Response status code.
        status: reqwest::StatusCode,
        /// The URL that was requested.
        url: String,
    },
}

/// Index URL for one (channel, architecture) pair.
///
/// `<mirror>/<release>/packages/<arch>/index.txt` for a numbered release,
/// `<mirror>/snapshots/packages/<arch>/index.txt` for the snapshot feed.
pub fn index_url(config: &MirrorConfig, channel: &Channel, arch: Arch) -> String {
    format!(
        "{}/{}/packages/{}/index.txt",
        config.mirror_base,
        channel.path_segment(),
        arch
    )
}

/// Modification time of the cache file, if it can be determined.
pub fn cache_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Decide whether the cached index must be (re-)downloaded.
///
/// Evaluated in order:
/// 1. a force flag always fetches;
/// 2. a release-mode index is fetched only if absent (releases are
///    immutable, so presence implies validity);
/// 3. a snapshot index is fetched when its age exceeds `max_age`.
///
/// `mtime` of `None` means the file is absent or its age cannot be
/// determined; unknown age counts as stale.
pub fn should_fetch(
    channel: &Channel,
    force: bool,
    mtime: Option<SystemTime>,
    now: SystemTime,
    max_age: Duration,
) -> bool {
    if force {
        return true;
    }
    match channel {
        Channel::Release(_) => mtime.is_none(),
        Channel::Snapshot => match mtime.and_then(|m| now.duration_since(m).ok()) {
            Some(age) => age > max_age,
            None => true,
        },
    }
}

/// Download `url` and replace the cache file at `dest` with the body.
///
/// The body is streamed to disk; a failed write leaves whatever was
/// written, and the next invocation fetches again. The cache file is
/// never partially updated with a successful exit.
pub async fn fetch_index(client: &Client, url: &str, dest: &Path) -> Result<(), FetchError> {
    tracing::info!(url, "fetching package index");

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    tracing::debug!(bytes = written, dest = %dest.display(), "index cached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::Release;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);
    const HOUR: Duration = Duration::from_secs(60 * 60);

    fn release() -> Channel {
        Channel::Release(Release::new(7, 7))
    }

    #[test]
    fn test_force_always_fetches() {
        let now = SystemTime::now();
        assert!(should_fetch(&release(), true, Some(now), now, DAY));
        assert!(should_fetch(&Channel::Snapshot, true, Some(now), now, DAY));
    }

    #[test]
    fn test_release_fetches_only_when_absent() {
        let now = SystemTime::now();
        assert!(should_fetch(&release(), false, None, now, DAY));
        // Present release index is never refetched, no matter how old.
        let ancient = now - 400 * DAY;
        assert!(!should_fetch(&release(), false, Some(ancient), now, DAY));
    }

    #[test]
    fn test_snapshot_age_window() {
        let now = SystemTime::now();
        assert!(!should_fetch(&Channel::Snapshot, false, Some(now - HOUR), now, DAY));
        assert!(!should_fetch(&Channel::Snapshot, false, Some(now - 23 * HOUR), now, DAY));
        assert!(should_fetch(&Channel::Snapshot, false, Some(now - 25 * HOUR), now, DAY));
    }

    #[test]
    fn test_unknown_age_is_stale() {
        let now = SystemTime::now();
        assert!(should_fetch(&Channel::Snapshot, false, None, now, DAY));
        // Mtime in the future (clock skew): duration_since fails, treat as stale.
        assert!(should_fetch(&Channel::Snapshot, false, Some(now + HOUR), now, DAY));
    }

    #[test]
    fn test_index_url_shapes() {
        let config = MirrorConfig::default();
        assert_eq!(
            index_url(&config, &release(), Arch::Amd64),
            "https://cdn.openbsd.org/pub/OpenBSD/7.7/packages/amd64/index.txt"
        );
        assert_eq!(
            index_url(&config, &Channel::Snapshot, Arch::Sparc64),
            "https://cdn.openbsd.org/pub/OpenBSD/snapshots/packages/sparc64/index.txt"
        );
    }

    #[test]
    fn test_cache_mtime_missing_file() {
        assert!(cache_mtime(Path::new("/nonexistent/index.txt")).is_none());
    }
}
