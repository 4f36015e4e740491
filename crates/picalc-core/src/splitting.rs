//! Recursive binary splitting over the series, serial and parallel.

use crate::calculator::PiError;
use crate::constants::DIGITS_PER_TERM;
use crate::options::Options;
use crate::progress::CancellationToken;
use crate::result::Pi;
use crate::series::{combine, term, SeriesTriple};

/// Number of series terms needed to produce `precision` fractional digits.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn terms_for_precision(precision: u64) -> u64 {
    (precision as f64 / DIGITS_PER_TERM) as u64 + 2
}

/// Evaluate the series over `[a, b)` without forking.
///
/// Cancellation is checked on entry to every recursive call, so a
/// cancelled token aborts the evaluation within one subdivision.
pub fn split_serial(a: u64, b: u64, cancel: &CancellationToken) -> Result<SeriesTriple, PiError> {
    cancel.check_cancelled()?;

    if b - a == 1 {
        return Ok(term(a));
    }

    let m = (a + b) / 2;
    let left = split_serial(a, m, cancel)?;
    let right = split_serial(m, b, cancel)?;
    Ok(combine(&left, &right))
}

/// Evaluate the series over `[a, b)`, forking halves above the threshold.
///
/// Ranges at or below `opts.split_threshold` terms fall back to the
/// serial evaluator, as does the whole call when the rayon pool has a
/// single worker. After each forked combination the size of the merged
/// range is added to the container's progress counter. The split point
/// is always the range midpoint, so the combination tree is identical
/// for every worker count.
pub fn split_parallel(
    a: u64,
    b: u64,
    pi: &Pi,
    opts: &Options,
    cancel: &CancellationToken,
) -> Result<SeriesTriple, PiError> {
    cancel.check_cancelled()?;

    let threshold = opts.split_threshold.max(1);
    if b - a <= threshold || rayon::current_num_threads() <= 1 {
        return split_serial(a, b, cancel);
    }

    let m = (a + b) / 2;
    let (left, right) = rayon::join(
        || split_parallel(a, m, pi, opts, cancel),
        || split_parallel(m, b, pi, opts, cancel),
    );
    let merged = combine(&left?, &right?);
    pi.add_completed(b - a);
    Ok(merged)
}
