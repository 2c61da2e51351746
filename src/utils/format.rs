//! Formatting utilities for file sizes.

use crate::config::BYTES_PER_MB;

/// Format a file size for the selected-file summary (e.g., "512B", "1.2K", "3.4M").
///
/// Uses binary units so the figures line up with the megabyte limit.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;

    if bytes >= BYTES_PER_MB {
        format!("{:.1}M", bytes as f64 / BYTES_PER_MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a byte count as megabytes without unit (e.g., "5", "2.5").
///
/// Whole megabytes print without decimals. Anything else is rounded up to
/// the next tenth, so a limit is never shown smaller than it is.
pub fn format_megabytes(bytes: u64) -> String {
    let mb = u128::from(BYTES_PER_MB);
    let tenths = (u128::from(bytes) * 10).div_ceil(mb);
    if tenths % 10 == 0 {
        (tenths / 10).to_string()
    } else {
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(500), "500B");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(5_242_880), "5.0M");
        assert_eq!(format_size(6_000_000), "5.7M");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(5_242_880), "5");
        assert_eq!(format_megabytes(1_048_576 / 2), "0.5");
        assert_eq!(format_megabytes(2_621_440), "2.5");
        assert_eq!(format_megabytes(1_048_577), "1.1");
        assert_eq!(format_megabytes(1_100_000), "1.1");
        assert_eq!(format_megabytes(0), "0");
    }
}
