/// Size formatting and compression statistics
///
/// Pure helpers shared by the preview panel and by error messages.

/// Unit table for human-readable sizes, base 1024.
/// Anything at or above 1024 TB is clamped to GB.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Derived numbers for one original/compressed pair, ready for display.
/// Recomputed from scratch whenever the artifact changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStats {
    /// Compressed size, e.g. "742.11 KB"
    pub compressed_size: String,
    /// Size reduction as a percentage with one decimal, e.g. "60.0%".
    /// Negative when the re-encode grew the file, rendered as-is ("-12.3%").
    pub ratio: String,
    /// Bytes saved, e.g. "1.2 MB" (or "-256 KB" when the file grew)
    pub saved: String,
}

/// Format a byte count as a human-readable label.
///
/// Zero is special-cased to "0 KB". Everything else picks the largest unit
/// that keeps the magnitude at or above 1, rounds to two decimals and drops
/// trailing zeros: `1 KB`, `1.5 KB`, `1.91 MB`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 KB".to_string();
    }

    // floor(log2(bytes) / 10) == floor(log1024(bytes)), computed exactly
    let exponent = ((bytes.ilog2() / 10) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{} {}", trim_decimals(rounded), UNITS[exponent])
}

/// Format a signed byte count. Negative values keep their sign in front of
/// the formatted magnitude.
pub fn format_size_signed(bytes: i64) -> String {
    if bytes < 0 {
        format!("-{}", format_size(bytes.unsigned_abs()))
    } else {
        format_size(bytes as u64)
    }
}

/// Compute display statistics for a compressed artifact.
///
/// The caller guarantees `original_size > 0`: an empty file never makes it
/// through decoding, so an artifact always has a non-empty original.
pub fn derive(original_size: u64, compressed_size: u64) -> DerivedStats {
    let ratio = (1.0 - compressed_size as f64 / original_size as f64) * 100.0;
    let saved = original_size as i64 - compressed_size as i64;

    DerivedStats {
        compressed_size: format_size(compressed_size),
        ratio: format!("{ratio:.1}%"),
        saved: format_size_signed(saved),
    }
}

/// Render with up to two decimals, dropping trailing zeros.
fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_zero_is_zero_kb() {
        assert_eq!(format_size(0), "0 KB");
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(600), "600 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1024 * 1024), "1 MB");
        assert_eq!(format_size(2_000_000), "1.91 MB");
        assert_eq!(format_size(10 * 1024 * 1024), "10 MB");
    }

    #[test]
    fn test_format_size_clamps_to_gigabytes() {
        assert_eq!(format_size(1024 * 1024 * 1024), "1 GB");
        // Past the unit table: stays in GB rather than inventing a unit
        assert_eq!(format_size(1u64 << 40), "1024 GB");
    }

    #[test]
    fn test_format_size_signed_negative() {
        assert_eq!(format_size_signed(-1536), "-1.5 KB");
        assert_eq!(format_size_signed(600), "600 B");
        assert_eq!(format_size_signed(0), "0 KB");
    }

    #[test]
    fn test_derive_reduction() {
        let stats = derive(1000, 400);
        assert_eq!(stats.ratio, "60.0%");
        assert_eq!(stats.compressed_size, "400 B");
        assert_eq!(stats.saved, "600 B");
    }

    #[test]
    fn test_derive_growth_is_negative() {
        let stats = derive(1000, 1200);
        assert_eq!(stats.ratio, "-20.0%");
        assert_eq!(stats.saved, "-200 B");
    }

    #[test]
    fn test_derive_identical_sizes() {
        let stats = derive(1000, 1000);
        assert_eq!(stats.ratio, "0.0%");
        assert_eq!(stats.saved, "0 KB");
    }
}
