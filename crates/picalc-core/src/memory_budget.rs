//! Memory estimation for pre-flight budget checks.

/// Working-set bytes charged per requested digit.
///
/// The root P, Q, and R products each carry roughly 1.13 decimal digits
/// (about half a byte) per requested digit, and transient products in
/// the combine and reduction steps multiply that several times over.
const BYTES_PER_DIGIT: usize = 16;

/// Estimated memory usage for a calculation.
#[derive(Debug, Clone, Copy)]
pub struct MemoryEstimate {
    /// Bytes for the digit buffer and its rendered form.
    pub result_bytes: usize,
    /// Bytes for intermediate products during splitting and reduction.
    pub temp_bytes: usize,
    /// Total estimated bytes.
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for computing `precision` fractional digits.
    #[must_use]
    pub fn estimate(precision: u64) -> Self {
        let digits = usize::try_from(precision).unwrap_or(usize::MAX);
        let result_bytes = digits.saturating_add(1).saturating_mul(2);
        let temp_bytes = digits.saturating_mul(BYTES_PER_DIGIT);

        Self {
            result_bytes,
            temp_bytes,
            total_bytes: result_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check whether the estimate fits within `limit` bytes.
    ///
    /// A limit of 0 means unlimited.
    #[must_use]
    pub fn fits_in(&self, limit: usize) -> bool {
        limit == 0 || self.total_bytes <= limit
    }
}

/// Parse a memory limit string like "8G", "512M", "1024K", or "2048B".
///
/// A bare number is taken as bytes; the empty string means no limit.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_part, multiplier) = match s.chars().last() {
        Some('G' | 'g') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        Some('M' | 'm') => (&s[..s.len() - 1], 1024 * 1024),
        Some('K' | 'k') => (&s[..s.len() - 1], 1024),
        Some('B' | 'b') => (&s[..s.len() - 1], 1),
        _ => (s, 1),
    };

    num_part
        .trim()
        .parse::<usize>()
        .map(|n| n.saturating_mul(multiplier))
        .map_err(|e| format!("invalid memory limit '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_small_precision() {
        let estimate = MemoryEstimate::estimate(100);
        assert_eq!(estimate.result_bytes, 202);
        assert_eq!(estimate.temp_bytes, 1600);
        assert_eq!(estimate.total_bytes, 1802);
    }

    #[test]
    fn estimate_grows_with_precision() {
        let small = MemoryEstimate::estimate(1_000);
        let large = MemoryEstimate::estimate(1_000_000);
        assert!(large.total_bytes > small.total_bytes);
    }

    #[test]
    fn fits_in_unlimited() {
        let estimate = MemoryEstimate::estimate(1_000_000);
        assert!(estimate.fits_in(0));
    }

    #[test]
    fn fits_in_limit() {
        let estimate = MemoryEstimate::estimate(1_000);
        assert!(estimate.fits_in(1024 * 1024));
        assert!(!estimate.fits_in(100));
    }

    #[test]
    fn parse_suffixed_limits() {
        assert_eq!(parse_memory_limit("8G").unwrap(), 8 * 1024 * 1024 * 1024);
        assert_eq!(parse_memory_limit("512M").unwrap(), 512 * 1024 * 1024);
        assert_eq!(parse_memory_limit("1024K").unwrap(), 1024 * 1024);
        assert_eq!(parse_memory_limit("2048B").unwrap(), 2048);
        assert_eq!(parse_memory_limit("4096").unwrap(), 4096);
    }

    #[test]
    fn parse_empty_means_unlimited() {
        assert_eq!(parse_memory_limit("").unwrap(), 0);
        assert_eq!(parse_memory_limit("  ").unwrap(), 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_memory_limit("abc").is_err());
        assert!(parse_memory_limit("12Q").is_err());
    }
}
