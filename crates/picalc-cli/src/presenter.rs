//! CLI result presentation.

use std::time::Duration;

use crate::output::{digit_string, format_duration, format_number};

/// Fractional digits shown inline before the preview is truncated.
const PREVIEW_DIGITS: usize = 100;

/// Presents computation results on stdout.
pub struct ResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl ResultPresenter {
    /// Create a new result presenter.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print the computed digits and a timing summary.
    ///
    /// Quiet mode prints only the digit string. Otherwise a short
    /// summary is printed, with the digit preview truncated after
    /// 100 fractional digits unless verbose mode is on.
    pub fn present(&self, digits: &[u8], precision: u64, duration: Duration) {
        if self.quiet {
            println!("{}", digit_string(digits));
            return;
        }

        println!("Digits: {}", format_number(precision));
        println!("Duration: {}", format_duration(duration));
        println!("\u{3c0} = {}", self.preview(digits));
        if self.is_truncated(digits) {
            println!("Use --output to save all digits to a file");
        }
    }

    /// Print an error message to stderr.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }

    fn preview(&self, digits: &[u8]) -> String {
        if !self.is_truncated(digits) {
            return digit_string(digits);
        }
        let mut out = digit_string(&digits[..=PREVIEW_DIGITS]);
        out.push_str("...");
        out
    }

    fn is_truncated(&self, digits: &[u8]) -> bool {
        !self.verbose && digits.len() > PREVIEW_DIGITS + 1
    }
}
