//! Chudnovsky series terms and their combination rule.
//!
//! Term `a` of the series contributes a rational triple:
//!
//! ```text
//! P(a) = (6a-5)(2a-1)(6a-1)
//! Q(a) = a^3 * 640320^3 / 24
//! R(a) = (-1)^a * P(a) * (13591409 + 545140134*a)
//! ```
//!
//! with the base case (P, Q, R) = (1, 1, 13591409) at a = 0. Two triples
//! covering adjacent index ranges merge as
//!
//! ```text
//! (P1*P2, Q1*Q2, R1*Q2 + P1*R2)
//! ```
//!
//! which is associative, so any split order over the same range produces
//! an identical triple. The full sum of the series is R/Q.

use num_bigint::BigInt;

use crate::constants::{CHUDNOVSKY_A, CHUDNOVSKY_B, CHUDNOVSKY_C3_OVER_24};

/// Partial products of the series over one half-open index range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesTriple {
    /// Product of the P(a) factors.
    pub p: BigInt,
    /// Product of the Q(a) factors.
    pub q: BigInt,
    /// Accumulated numerator of the partial sum, scaled by Q.
    pub r: BigInt,
}

/// Compute the triple for the single series index `a`.
///
/// The cubic and linear factors are accumulated in `BigInt` because
/// `a^3` overflows `u64` for indices above a few million.
#[must_use]
pub fn term(a: u64) -> SeriesTriple {
    if a == 0 {
        return SeriesTriple {
            p: BigInt::from(1u32),
            q: BigInt::from(1u32),
            r: BigInt::from(CHUDNOVSKY_A),
        };
    }

    let p = BigInt::from(6 * a - 5) * (2 * a - 1) * (6 * a - 1);
    let q = BigInt::from(a) * a * a * CHUDNOVSKY_C3_OVER_24;
    let mut r = &p * (BigInt::from(CHUDNOVSKY_B) * a + CHUDNOVSKY_A);
    if a % 2 == 1 {
        r = -r;
    }

    SeriesTriple { p, q, r }
}

/// Merge the triples of two adjacent index ranges `[a, m)` and `[m, b)`.
#[must_use]
pub fn combine(left: &SeriesTriple, right: &SeriesTriple) -> SeriesTriple {
    SeriesTriple {
        p: &left.p * &right.p,
        q: &left.q * &right.q,
        r: &left.r * &right.q + &left.p * &right.r,
    }
}
