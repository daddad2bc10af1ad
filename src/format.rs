/// Human-readable magnitude formatting for the KPI cards.
///
/// Compacts counts and dollar amounts to K/M/B so "4,213,557 affected"
/// renders as "4.2M". One decimal place above a thousand, none below.

/// Formats `n` with a K/M/B suffix.
pub fn human_count(n: f64) -> String {
    if n >= 1.0e9 {
        format!("{:.1}B", n / 1.0e9)
    } else if n >= 1.0e6 {
        format!("{:.1}M", n / 1.0e6)
    } else if n >= 1.0e3 {
        format!("{:.1}K", n / 1.0e3)
    } else {
        format!("{:.0}", n)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_thresholds() {
        assert_eq!(human_count(0.0), "0");
        assert_eq!(human_count(999.0), "999");
        assert_eq!(human_count(1_000.0), "1.0K");
        assert_eq!(human_count(4_213_557.0), "4.2M");
        assert_eq!(human_count(34_000_000_000.0), "34.0B");
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        assert_eq!(human_count(1_250.0), "1.2K");
        assert_eq!(human_count(1_950_000.0), "2.0M");
    }
}
