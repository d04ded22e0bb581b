//! Errors returned when (re)configuring the delay engine.
//!
//! Only configuration can fail. The per-sample path never returns errors;
//! out-of-range control values there are a caller contract, not a runtime
//! condition.

use std::collections::TryReserveError;

use thiserror::Error;

/// Why [`DelayEngine::configure`](crate::DelayEngine::configure) refused a
/// configuration. The engine keeps its previous state in every case.
#[derive(Debug, Error)]
pub enum ConfigureError {
    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f32),

    #[error("maximum delay time must be finite and positive, got {0} ms")]
    InvalidMaxDelay(f32),

    #[error("could not allocate a delay buffer of {capacity} samples")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
