//! # picalc-core
//!
//! Core library for the PiCalc-rs pi digit calculator.
//!
//! Evaluates the Chudnovsky series by recursive binary splitting over
//! arbitrary-precision integers, forking subranges across a rayon pool,
//! and reduces the combined series state to decimal digits in a shared,
//! thread-safe container that exposes lock-free progress polling.

pub mod calculator;
pub mod constants;
pub mod memory_budget;
pub mod options;
pub mod progress;
pub mod reduce;
pub mod result;
pub mod series;
pub mod splitting;

// Re-exports
pub use calculator::{calculate_pi, PiError};
pub use constants::{exit_codes, DEFAULT_SPLIT_THRESHOLD, DIGITS_PER_TERM};
pub use options::Options;
pub use progress::CancellationToken;
pub use result::Pi;
pub use series::SeriesTriple;

/// Compute pi to `precision` fractional digits as a decimal string.
///
/// This is a convenience entry point for simple use cases. For progress
/// polling, cancellation, or shared access while the computation runs,
/// use [`calculate_pi`] with a [`Pi`] container directly.
///
/// # Example
/// ```
/// assert_eq!(picalc_core::pi_string(5).unwrap(), "3.14159");
/// assert!(picalc_core::pi_string(20).unwrap().starts_with("3.1415926535897932384"));
/// ```
pub fn pi_string(precision: u64) -> Result<String, PiError> {
    let pi = Pi::new(precision)?;
    let cancel = CancellationToken::new();
    let opts = Options::default();
    calculate_pi(precision, &pi, &cancel, &opts)?;

    let digits = pi.digits(usize::MAX);
    let mut out = String::with_capacity(digits.len() + 1);
    out.push('3');
    out.push('.');
    for &d in digits.get(1..).unwrap_or(&[]) {
        out.push(char::from(b'0' + d));
    }
    Ok(out)
}
