//! Final reduction from a combined series triple to decimal digits.
//!
//! The closed form pi = 426880 * sqrt(10005) * Q / R is evaluated in
//! fixed point: every operand is scaled by a power of ten large enough
//! that plain integer division of the scaled values yields the requested
//! digits, with [`crate::constants::GUARD_DIGITS`] extra digits carried
//! to absorb truncation in the square root and the division.

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{pow, Signed, ToPrimitive, Zero};

use crate::constants::{FINAL_MULTIPLIER, GUARD_DIGITS, PI_DIGIT_TABLE, SQRT_ARGUMENT};
use crate::series::SeriesTriple;

/// 10^n as a big integer.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pow10(n: u64) -> BigInt {
    pow(BigInt::from(10u32), n as usize)
}

/// Integer square root, floor(sqrt(n)).
///
/// Operands that fit in `u64` use the library root directly; larger
/// operands run Newton's iteration x <- (x + n/x) / 2 from x0 = n/2,
/// which descends monotonically onto the floor root. Negative operands
/// yield zero.
#[must_use]
pub fn big_isqrt(n: &BigInt) -> BigInt {
    if n.is_negative() {
        return BigInt::zero();
    }
    if let Some(small) = n.to_u64() {
        return BigInt::from(small.sqrt());
    }

    let mut x = n >> 1;
    loop {
        let next = (&x + n / &x) >> 1;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// Render `precision + 1` decimal digits of pi from the root triple.
///
/// Slot 0 holds the integer digit 3; slots 1..=precision hold the
/// fractional digits, truncated (never rounded) from the scaled value.
pub(crate) fn digits_from_triple(triple: &SeriesTriple, precision: u64) -> Vec<u8> {
    let work = precision + GUARD_DIGITS;

    // floor(sqrt(10005) * 10^work)
    let sqrt_scaled = big_isqrt(&(pow10(2 * work) * SQRT_ARGUMENT));
    let pi_scaled = (BigInt::from(FINAL_MULTIPLIER) * sqrt_scaled * &triple.q) / &triple.r;

    // The scaled value has work + 1 digits and starts with 3; keep the
    // first precision + 1 of them.
    let rendered = pi_scaled.to_string();
    let mut digits = vec![0u8; digit_len(precision)];
    for (slot, ch) in digits.iter_mut().zip(rendered.bytes()) {
        *slot = ch - b'0';
    }
    digits
}

/// Digit buffer for precisions served from the precomputed table.
pub(crate) fn table_digits(precision: u64) -> Vec<u8> {
    let mut digits = vec![0u8; digit_len(precision)];
    for (slot, &d) in digits.iter_mut().zip(PI_DIGIT_TABLE.iter()) {
        *slot = d;
    }
    digits
}

fn digit_len(precision: u64) -> usize {
    usize::try_from(precision).map_or(usize::MAX, |p| p.saturating_add(1))
}
