//! # One-Pole TPT Lowpass Filter
//!
//! A first-order lowpass applied to the delayed signal before it is mixed
//! and fed back. Each trip around the feedback loop passes through it
//! again, so repeats get progressively darker.
//!
//! ## Topology-Preserving Transform
//!
//! The filter is an analog RC lowpass discretized with the bilinear
//! transform in its TPT (trapezoidal integrator) form:
//!
//! ```text
//! g = tan(π * cutoff / sample_rate)     // prewarped integrator gain
//! G = g / (1 + g)
//!
//! v = G * (x - s)
//! y = v + s
//! s = y + v                             // integrator state for next sample
//! ```
//!
//! The single state variable `s` is the filter's one-sample memory. The
//! prewarping makes the -3 dB point land exactly on `cutoff`, and the
//! structure stays well behaved when the cutoff changes every sample.
//!
//! ## Per-Sample Coefficients
//!
//! The cutoff is a live, automatable control, so the engine calls
//! [`set_cutoff()`](OnePoleFilter::set_cutoff) on every sample. That costs
//! one `tan()` per sample per channel, and the coefficient is never
//! cached across calls.

use std::f32::consts::PI;

/// Lowest cutoff accepted by [`OnePoleFilter::set_cutoff`].
const MIN_CUTOFF_HZ: f32 = 20.0;

/// Upper cutoff limit as a fraction of the sample rate. `tan()` diverges
/// at Nyquist (half the sample rate), so we stay just below it.
const MAX_CUTOFF_RATIO: f32 = 0.49;

/// A one-pole (6 dB/octave) lowpass filter in TPT form.
#[derive(Debug, Clone, Copy)]
pub struct OnePoleFilter {
    /// `G = g / (1 + g)`. Range: 0.0 (closed) to 1.0 (open).
    gain: f32,

    /// Integrator state carried from one sample to the next.
    state: f32,
}

impl Default for OnePoleFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl OnePoleFilter {
    /// Create a filter that passes its input through unchanged until a
    /// cutoff is set.
    ///
    /// With `gain = 1.0`: `v = x - s`, `y = x`, `s = 2x - s`. The output is
    /// the input regardless of the state.
    pub fn new() -> Self {
        Self {
            gain: 1.0,
            state: 0.0,
        }
    }

    /// Recompute the coefficient for `cutoff_hz` at `sample_rate`.
    ///
    /// The cutoff is clamped to `[20 Hz, 0.49 * sample_rate]`. At sample
    /// rates so low that `0.49 * sample_rate` is below 20 Hz, the upper
    /// limit wins.
    ///
    /// Example at 48000 Hz:
    /// - cutoff = 20000 Hz → G ≈ 0.79 (barely filtering)
    /// - cutoff = 1000 Hz  → G ≈ 0.06
    /// - cutoff = 20 Hz    → G ≈ 0.0013 (heavy filtering)
    pub fn set_cutoff(&mut self, cutoff_hz: f32, sample_rate: f32) {
        let max_cutoff = sample_rate * MAX_CUTOFF_RATIO;
        let safe_cutoff = cutoff_hz.clamp(MIN_CUTOFF_HZ.min(max_cutoff), max_cutoff);

        let g = (PI * safe_cutoff / sample_rate).tan();
        self.gain = g / (1.0 + g);
    }

    /// Filter one sample.
    pub fn process(&mut self, input: f32) -> f32 {
        let v = self.gain * (input - self.state);
        let output = v + self.state;
        self.state = output + v;
        output
    }

    /// Zero the integrator state. The coefficient is left alone since the
    /// engine overwrites it on the next sample anyway.
    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
