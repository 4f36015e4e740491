//! Thread-safe container for computed digits and live progress.
//!
//! The digit buffer is written once, under the exclusive lock, after the
//! whole series has been combined and reduced; readers therefore observe
//! either the initial zeroed buffer or the complete result, never a
//! partial state. The progress counter is a plain relaxed atomic so
//! polling it never contends with digit access.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::calculator::PiError;
use crate::constants::PROGRESS_DIGITS_PER_UNIT;

/// Shared state for one pi computation.
pub struct Pi {
    digits: RwLock<Vec<u8>>,
    completed: AtomicU64,
    precision: u64,
}

impl Pi {
    /// Create a container sized for `precision` fractional digits.
    ///
    /// The buffer holds `precision + 1` digit slots; slot 0 is the
    /// integer digit. Allocation failure is reported as an error rather
    /// than aborting the process.
    pub fn new(precision: u64) -> Result<Self, PiError> {
        let len = usize::try_from(precision)
            .ok()
            .and_then(|p| p.checked_add(1))
            .ok_or_else(|| {
                PiError::Allocation(format!("{precision} digits exceed the address space"))
            })?;

        let mut digits = Vec::new();
        digits
            .try_reserve_exact(len)
            .map_err(|e| PiError::Allocation(format!("digit buffer of {len} bytes: {e}")))?;
        digits.resize(len, 0);

        Ok(Self {
            digits: RwLock::new(digits),
            completed: AtomicU64::new(0),
            precision,
        })
    }

    /// Target precision in fractional digits.
    #[must_use]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Copy of the first `n` digit slots, clamped to the buffer length.
    ///
    /// Callable at any time from any thread; before completion the copy
    /// is all zeros.
    #[must_use]
    pub fn digits(&self, n: usize) -> Vec<u8> {
        let buf = self.digits.read();
        let n = n.min(buf.len());
        buf[..n].to_vec()
    }

    /// Estimated completion percentage, clamped to `[0, 99]`.
    ///
    /// The estimate reads only the atomic counter. 100 is reserved: a
    /// computation is complete when `calculate_pi` returns, not when the
    /// counter saturates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let completed = self.completed.load(Ordering::Relaxed) as f64;
        let mut divisor = self.precision as f64 / PROGRESS_DIGITS_PER_UNIT;
        if divisor <= 0.0 {
            divisor = 1.0;
        }
        (completed / divisor * 100.0).clamp(0.0, 99.0)
    }

    /// Add `amount` completed work units to the progress counter.
    ///
    /// Lock-free; called concurrently from driver branches.
    pub fn add_completed(&self, amount: u64) {
        self.completed.fetch_add(amount, Ordering::Relaxed);
    }

    /// Copy `digits` into the buffer under the write lock.
    pub(crate) fn write_digits(&self, digits: &[u8]) {
        let mut buf = self.digits.write();
        for (slot, &d) in buf.iter_mut().zip(digits) {
            *slot = d;
        }
    }

    /// Saturate the progress counter once the digits are in place.
    pub(crate) fn mark_completed(&self) {
        self.completed.store(self.precision, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_container_is_zeroed() {
        let pi = Pi::new(10).unwrap();
        assert_eq!(pi.precision(), 10);
        assert_eq!(pi.digits(11), vec![0; 11]);
    }

    #[test]
    fn digits_clamps_to_buffer_length() {
        let pi = Pi::new(10).unwrap();
        assert_eq!(pi.digits(1000).len(), 11);
        assert_eq!(pi.digits(usize::MAX).len(), 11);
        assert_eq!(pi.digits(0).len(), 0);
    }

    #[test]
    fn write_then_read_round_trip() {
        let pi = Pi::new(5).unwrap();
        pi.write_digits(&[3, 1, 4, 1, 5, 9]);
        assert_eq!(pi.digits(6), vec![3, 1, 4, 1, 5, 9]);
        assert_eq!(pi.digits(3), vec![3, 1, 4]);
    }

    #[test]
    fn short_write_keeps_trailing_zeros() {
        let pi = Pi::new(4).unwrap();
        pi.write_digits(&[3, 1]);
        assert_eq!(pi.digits(5), vec![3, 1, 0, 0, 0]);
    }

    #[test]
    fn progress_starts_at_zero() {
        let pi = Pi::new(100).unwrap();
        assert!((pi.progress() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_scales_with_completed_units() {
        let pi = Pi::new(100).unwrap();
        pi.add_completed(3);
        let p = pi.progress();
        assert!(p > 0.0 && p < 99.0, "expected partial progress, got {p}");
    }

    #[test]
    fn progress_clamps_at_ninety_nine() {
        let pi = Pi::new(100).unwrap();
        pi.add_completed(10_000);
        assert!((pi.progress() - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mark_completed_saturates_progress() {
        let pi = Pi::new(100).unwrap();
        pi.mark_completed();
        assert!((pi.progress() - 99.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_precision_progress_stays_zero() {
        let pi = Pi::new(0).unwrap();
        assert!((pi.progress() - 0.0).abs() < f64::EPSILON);
        pi.mark_completed();
        assert!((pi.progress() - 0.0).abs() < f64::EPSILON);
    }
}
