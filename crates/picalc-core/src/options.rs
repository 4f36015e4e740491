//! Calculation options.

use crate::constants::DEFAULT_SPLIT_THRESHOLD;

/// Options for a pi calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Range size (in series terms) at or below which splitting runs
    /// serially instead of forking.
    pub split_threshold: u64,
    /// Evaluate the whole series on the calling thread.
    pub sequential: bool,
    /// Memory limit in bytes (0 = unlimited).
    pub memory_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            sequential: false,
            memory_limit: 0,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.split_threshold == 0 {
            self.split_threshold = DEFAULT_SPLIT_THRESHOLD;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.split_threshold, DEFAULT_SPLIT_THRESHOLD);
        assert!(!opts.sequential);
        assert_eq!(opts.memory_limit, 0);
    }

    #[test]
    fn normalize_zero_threshold() {
        let opts = Options {
            split_threshold: 0,
            ..Options::default()
        }
        .normalize();
        assert_eq!(opts.split_threshold, DEFAULT_SPLIT_THRESHOLD);
    }

    #[test]
    fn normalize_keeps_explicit_threshold() {
        let opts = Options {
            split_threshold: 7,
            ..Options::default()
        }
        .normalize();
        assert_eq!(opts.split_threshold, 7);
    }
}
