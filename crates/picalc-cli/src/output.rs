//! CLI output formatting and the digit file writer.

use std::io::{self, BufWriter, Write};
use std::time::Duration;

/// Digit characters written per batch when streaming to a file.
const WRITE_BATCH: usize = 1000;

/// Render a digit buffer as `"3."` followed by the fractional digits.
///
/// Slot 0 of the buffer is the integer digit and is replaced by the
/// fixed `"3."` prefix; an empty or single-slot buffer renders as
/// `"3."` alone.
#[must_use]
pub fn digit_string(digits: &[u8]) -> String {
    let frac = digits.get(1..).unwrap_or(&[]);
    let mut out = String::with_capacity(frac.len() + 2);
    out.push('3');
    out.push('.');
    for &d in frac {
        out.push(char::from(b'0' + d));
    }
    out
}

/// Write pi digits to a file as `"3."` followed by the fractional digits.
///
/// Digits are converted and flushed in fixed-size batches so large
/// buffers never need a second full-size allocation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_digits_to_file(digits: &[u8], path: &str) -> io::Result<()> {
    let mut file = BufWriter::new(std::fs::File::create(path)?);
    file.write_all(b"3.")?;

    let frac = digits.get(1..).unwrap_or(&[]);
    let mut batch = [0u8; WRITE_BATCH];
    for chunk in frac.chunks(WRITE_BATCH) {
        for (out, &d) in batch.iter_mut().zip(chunk) {
            *out = b'0' + d;
        }
        file.write_all(&batch[..chunk.len()])?;
    }
    file.flush()
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
