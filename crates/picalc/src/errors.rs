//! Error handling and exit codes.

use picalc_core::calculator::PiError;
use picalc_core::constants::exit_codes;

/// Map a run error to the process exit code.
///
/// Cancellation exits with the conventional interrupt code; everything
/// else, including I/O failures wrapped by anyhow, exits generically.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PiError>() {
        Some(PiError::Cancelled) => exit_codes::ERROR_CANCELED,
        _ => exit_codes::ERROR_GENERIC,
    }
}
