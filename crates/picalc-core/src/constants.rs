//! Constants shared across the calculation engine.

/// Additive constant A in the Chudnovsky linear term A + B*a.
pub const CHUDNOVSKY_A: u64 = 13_591_409;

/// Multiplicative constant B in the Chudnovsky linear term A + B*a.
pub const CHUDNOVSKY_B: u64 = 545_140_134;

/// 640320^3 / 24, the cubic factor appearing in every Q(a) term.
pub const CHUDNOVSKY_C3_OVER_24: u64 = 10_939_058_860_032_000;

/// Scaling factor in the closed form pi = 426880 * sqrt(10005) * Q / R.
pub const FINAL_MULTIPLIER: u64 = 426_880;

/// Radicand in the closed form pi = 426880 * sqrt(10005) * Q / R.
pub const SQRT_ARGUMENT: u64 = 10_005;

/// Decimal digits contributed by each series term, used to size the series.
pub const DIGITS_PER_TERM: f64 = 14.18;

/// Divisor base for the progress estimate (digits per completed work unit).
pub const PROGRESS_DIGITS_PER_UNIT: f64 = 14.0;

/// Default number of series terms below which splitting stops forking.
pub const DEFAULT_SPLIT_THRESHOLD: u64 = 100;

/// Extra decimal digits carried through the final reduction to absorb
/// truncation error in the square root and division.
pub const GUARD_DIGITS: u64 = 32;

/// Largest precision served from the precomputed digit table.
pub const MAX_TABLE_PRECISION: u64 = 10;

/// Leading digits of pi (integer digit first) for the small-precision path.
pub const PI_DIGIT_TABLE: [u8; 10] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];

/// Process exit codes used by the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Calculation cancelled by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_constant_value() {
        let c: u128 = 640_320;
        assert_eq!(u128::from(CHUDNOVSKY_C3_OVER_24), c * c * c / 24);
    }

    #[test]
    fn digit_table_starts_with_pi() {
        assert_eq!(PI_DIGIT_TABLE[0], 3);
        assert_eq!(&PI_DIGIT_TABLE[1..5], &[1, 4, 1, 5]);
        assert_eq!(PI_DIGIT_TABLE.len() as u64, MAX_TABLE_PRECISION);
    }

    #[test]
    fn terms_yield_more_digits_than_progress_unit() {
        assert!(DIGITS_PER_TERM > PROGRESS_DIGITS_PER_UNIT);
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::ERROR_GENERIC, 1);
        assert_eq!(exit_codes::ERROR_CANCELED, 130);
    }
}
