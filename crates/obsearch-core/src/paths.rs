//! Cache directory and cache-file path resolution.

use std::path::{Path, PathBuf};

use dirs::home_dir;

use crate::arch::Arch;
use crate::release::Channel;

/// Returns the cache directory, or None if the user's home cannot be resolved.
pub fn try_cache_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("OBSEARCH_CACHE") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".cache").join("obsearch"))
}

/// Returns the canonical cache directory (`~/.cache/obsearch`).
///
/// # Panics
///
/// Panics if neither `OBSEARCH_CACHE` is set nor the user's home directory
/// can be resolved.
pub fn cache_home() -> PathBuf {
    try_cache_home().expect("Could not determine home directory. Set OBSEARCH_CACHE to override.")
}

/// Cache file for one (architecture, channel) pair. Pure; no I/O.
///
/// Release-mode indexes key on the release number so that switching
/// releases never aliases onto a stale file; the snapshot feed keys on
/// the architecture alone.
pub fn index_path(base: &Path, arch: Arch, channel: &Channel) -> PathBuf {
    base.join(format!("index-{arch}-{}.txt", channel.cache_key()))
}

/// Ensure the cache directory exists. Idempotent; a pre-existing
/// directory is not an error.
pub fn ensure_cache_dir(base: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::Release;

    #[test]
    fn test_index_path_is_deterministic() {
        let base = Path::new("/tmp/cache");
        let rel = Channel::Release(Release::new(7, 7));

        assert_eq!(
            index_path(base, Arch::Amd64, &rel),
            PathBuf::from("/tmp/cache/index-amd64-7.7.txt")
        );
        assert_eq!(
            index_path(base, Arch::Sparc64, &Channel::Snapshot),
            PathBuf::from("/tmp/cache/index-sparc64-snapshot.txt")
        );
    }

    #[test]
    fn test_distinct_keys_distinct_paths() {
        let base = Path::new("/c");
        let a = index_path(base, Arch::Amd64, &Channel::Release(Release::new(7, 6)));
        let b = index_path(base, Arch::Amd64, &Channel::Release(Release::new(7, 7)));
        let c = index_path(base, Arch::Amd64, &Channel::Snapshot);
        let d = index_path(base, Arch::Arm64, &Channel::Snapshot);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(c, d);
    }

    #[test]
    fn test_ensure_cache_dir_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("cache");
        ensure_cache_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Second call must not fail.
        ensure_cache_dir(&dir).unwrap();
    }
}
