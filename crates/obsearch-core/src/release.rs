//! Release identifiers and the release-vs-snapshot channel.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Strict release shape: single digit, literal dot, single digit.
static RELEASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\.\d$").expect("static pattern"));

/// Errors from release parsing and range validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReleaseError {
    /// The input is not a `N.N` version string.
    #[error("invalid release '{0}': expected a version like 7.7")]
    Syntax(String),

    /// The release parses but falls outside the supported range.
    #[error("release {given} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        /// The release the user asked for.
        given: Release,
        /// Oldest supported release.
        min: Release,
        /// Newest supported release.
        max: Release,
    },
}

/// A two-component OS release number such as `7.7`.
///
/// Parsing enforces the syntactic shape only; range validation against the
/// supported release window is done by
/// [`MirrorConfig::validate_release`](crate::MirrorConfig::validate_release),
/// since the window is configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Release {
    /// Major version component.
    pub major: u8,
    /// Minor version component.
    pub minor: u8,
}

impl Release {
    /// Build a release from its components.
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl std::str::FromStr for Release {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !RELEASE_RE.is_match(s) {
            return Err(ReleaseError::Syntax(s.to_string()));
        }
        let (major, minor) = s.split_once('.').ok_or_else(|| {
            // Unreachable given the pattern, but keep the error honest.
            ReleaseError::Syntax(s.to_string())
        })?;
        Ok(Self {
            major: major.parse().map_err(|_| ReleaseError::Syntax(s.to_string()))?,
            minor: minor.parse().map_err(|_| ReleaseError::Syntax(s.to_string()))?,
        })
    }
}

/// Which package feed a search targets.
///
/// Numbered releases are immutable once published; the snapshot feed is
/// rebuilt continuously and its cached index expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// A fixed numbered release.
    Release(Release),
    /// The rolling snapshot feed.
    Snapshot,
}

impl Channel {
    /// Mirror path segment: the release number, or `snapshots`.
    pub fn path_segment(&self) -> String {
        match self {
            Self::Release(r) => r.to_string(),
            Self::Snapshot => "snapshots".to_string(),
        }
    }

    /// Cache-file key: the release number, or `snapshot`.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Release(r) => r.to_string(),
            Self::Snapshot => "snapshot".to_string(),
        }
    }

    /// True for the rolling snapshot feed.
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Release(r) => write!(f, "{r}"),
            Self::Snapshot => write!(f, "snapshot"),
        }
    }
}
