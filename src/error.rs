//! Error types for tapcalc.
//!
//! Degraded arithmetic is not a Rust error: division by zero, NaN, and
//! infinities flow through the display state so the next input can
//! overwrite them. The variants here are reserved for malformed event
//! payloads and runtime transport conditions.

use thiserror::Error;

/// Convenience alias for results carrying [`CalcError`].
pub type CalcResult<T> = Result<T, CalcError>;

/// Top-level error type for tapcalc.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A digit event carried a payload outside `0..=9`.
    #[error("digit {digit} is out of range 0-9")]
    DigitOutOfRange {
        /// The rejected payload.
        digit: u8,
    },

    /// The runtime queue was at capacity; the event was not accepted.
    #[error("event queue is full (capacity: {capacity})")]
    QueueFull {
        /// Configured queue capacity.
        capacity: usize,
    },

    /// The runtime worker has shut down.
    #[error("calculator runtime is disconnected")]
    Disconnected,

    /// Waiting for an event result timed out.
    #[error("timed out after {duration_ms}ms waiting for an event result")]
    Timeout {
        /// How long we waited.
        duration_ms: u64,
    },
}

impl CalcError {
    /// Returns true if this error came from event-payload validation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::DigitOutOfRange { .. })
    }

    /// Returns true if resubmitting the event may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::DigitOutOfRange { .. } | Self::Disconnected => false,
            Self::QueueFull { .. } | Self::Timeout { .. } => true,
        }
    }
}
