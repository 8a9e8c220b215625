//! Process-wide mirror configuration.
//!
//! Built once at startup and passed by reference; nothing here is a
//! mutable global.

use std::time::Duration;

use crate::release::{Release, ReleaseError};

/// Default package mirror.
pub const DEFAULT_MIRROR: &str = "https://cdn.openbsd.org/pub/OpenBSD";

/// Newest release the tool knows about.
pub const CURRENT_RELEASE: Release = Release::new(7, 7);

/// Oldest release the mirror still carries a package index for.
pub const MIN_RELEASE: Release = Release::new(2, 0);

/// How long a cached snapshot index stays fresh.
pub const MAX_SNAPSHOT_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Immutable per-invocation configuration.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Base URL of the package mirror, without a trailing slash.
    pub mirror_base: String,
    /// Newest supported release (inclusive upper bound).
    pub current_release: Release,
    /// Oldest supported release (inclusive lower bound).
    pub min_release: Release,
    /// Snapshot cache freshness window.
    pub max_snapshot_age: Duration,
}

impl MirrorConfig {
    /// Configuration for a specific mirror, with stock release window and
    /// snapshot freshness.
    pub fn with_mirror(mirror_base: impl Into<String>) -> Self {
        let mut base = mirror_base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            mirror_base: base,
            current_release: CURRENT_RELEASE,
            min_release: MIN_RELEASE,
            max_snapshot_age: MAX_SNAPSHOT_AGE,
        }
    }

    /// Check a parsed release against the supported window.
    pub fn validate_release(&self, release: Release) -> Result<(), ReleaseError> {
        if release < self.min_release || release > self.current_release {
            return Err(ReleaseError::OutOfRange {
                given: release,
                min: self.min_release,
                max: self.current_release,
            });
        }
        Ok(())
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self::with_mirror(DEFAULT_MIRROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_window() {
        let config = MirrorConfig::default();
        assert!(config.validate_release(Release::new(2, 0)).is_ok());
        assert!(config.validate_release(Release::new(7, 7)).is_ok());
        assert!(config.validate_release(Release::new(5, 3)).is_ok());

        // Below the floor and above the ceiling.
        assert!(matches!(
            config.validate_release(Release::new(1, 9)),
            Err(ReleaseError::OutOfRange { .. })
        ));
        assert!(matches!(
            config.validate_release(Release::new(7, 8)),
            Err(ReleaseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = MirrorConfig::with_mirror("https://mirror.example/pub/OpenBSD/");
        assert_eq!(config.mirror_base, "https://mirror.example/pub/OpenBSD");
    }
}
