//! Top-level pi calculation and its error type.

use std::time::Instant;

use tracing::debug;

use crate::constants::MAX_TABLE_PRECISION;
use crate::options::Options;
use crate::progress::CancellationToken;
use crate::reduce::{digits_from_triple, table_digits};
use crate::result::Pi;
use crate::splitting::{split_parallel, split_serial, terms_for_precision};

/// Error type for pi calculations.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// Requested precision is not a valid digit count.
    #[error("invalid precision: {0} (expected a non-negative digit count)")]
    InvalidPrecision(i64),

    /// The digit buffer or working set cannot be allocated.
    #[error("allocation failure: {0}")]
    Allocation(String),

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,
}

/// Compute pi to `precision` fractional digits into the shared container.
///
/// Blocks until the digits are written or the token is cancelled. The
/// container's buffer is written exactly once, after the whole series
/// has been combined and reduced, so concurrent readers never observe a
/// partially combined result. Precisions at or below the digit table
/// size skip the series entirely.
pub fn calculate_pi(
    precision: u64,
    pi: &Pi,
    cancel: &CancellationToken,
    opts: &Options,
) -> Result<(), PiError> {
    if precision <= MAX_TABLE_PRECISION {
        pi.write_digits(&table_digits(precision));
        pi.mark_completed();
        return Ok(());
    }

    let start = Instant::now();
    let terms = terms_for_precision(precision);
    debug!(precision, terms, "Starting series evaluation");

    let root = if opts.sequential {
        split_serial(0, terms, cancel)?
    } else {
        split_parallel(0, terms, pi, opts, cancel)?
    };

    cancel.check_cancelled()?;
    let digits = digits_from_triple(&root, precision);
    pi.write_digits(&digits);
    pi.mark_completed();

    debug!(elapsed = ?start.elapsed(), "Digits written");
    Ok(())
}
