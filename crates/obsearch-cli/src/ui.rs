//! Output formatting for search results.

use obsearch_core::{Arch, Channel, IndexRecord};

/// Fixed display width of the package name column.
pub const NAME_WIDTH: usize = 50;

/// Decorative glyph for `--emoji` output.
pub const GLYPH: &str = "🐡";

/// One-line search-context banner printed before the results.
pub fn banner(pattern: &str, channel: &Channel, arch: Arch) -> String {
    format!(
        "Searching {}/packages/{arch} for '{pattern}'",
        channel.path_segment()
    )
}

/// Format one match row: name left-justified and truncated to
/// [`NAME_WIDTH`], then the size in MB to two decimals.
pub fn format_row(record: &IndexRecord, emoji: bool) -> String {
    let name: String = record.name.chars().take(NAME_WIDTH).collect();
    let row = format!(
        "{name:<width$} Size: {size:.2}MB",
        width = NAME_WIDTH,
        size = record.size_mb()
    );
    if emoji { format!("{GLYPH} {row}") } else { row }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obsearch_core::Release;

    fn record(name: &str, size_bytes: u64) -> IndexRecord {
        IndexRecord {
            name: name.to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_row_shows_size_in_mb() {
        let row = format_row(&record("foo-1.0", 1_048_576), false);
        assert!(row.contains("foo-1.0"));
        assert!(row.contains("Size: 1.00MB"));
    }

    #[test]
    fn test_row_is_fixed_width() {
        let row = format_row(&record("foo-1.0", 512), false);
        assert!(row.starts_with("foo-1.0"));
        assert_eq!(row.find("Size:"), Some(NAME_WIDTH + 1));

        let long = "x".repeat(NAME_WIDTH + 20);
        let row = format_row(&record(&long, 512), false);
        assert_eq!(row.find("Size:"), Some(NAME_WIDTH + 1));
    }

    #[test]
    fn test_emoji_prefix() {
        let row = format_row(&record("foo-1.0", 512), true);
        assert!(row.starts_with("🐡 "));
    }

    #[test]
    fn test_banner_names_feed_and_arch() {
        let rel = Channel::Release(Release::new(7, 7));
        assert_eq!(
            banner("vim", &rel, Arch::Amd64),
            "Searching 7.7/packages/amd64 for 'vim'"
        );
        assert_eq!(
            banner("vim", &Channel::Snapshot, Arch::Arm64),
            "Searching snapshots/packages/arm64 for 'vim'"
        );
    }
}
