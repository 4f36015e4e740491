//! Cooperative cancellation for in-flight computations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::calculator::PiError;

/// Cooperative cancellation token backed by an atomic flag.
///
/// Clones share the flag, so a token handed to a computation thread can
/// be cancelled from a signal handler or another thread.
///
/// # Example
/// ```
/// use picalc_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicU64>,
}

impl CancellationToken {
    /// Create a new, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) != 0
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(1, Ordering::Relaxed);
    }

    /// Return an error if cancellation has been requested.
    pub fn check_cancelled(&self) -> Result<(), PiError> {
        if self.is_cancelled() {
            Err(PiError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
