//! # Delay Time Smoothing
//!
//! Jumping the read position of a delay line from one place to another
//! produces a discontinuity, heard as a click. Instead the engine glides
//! the delay time toward its target with a one-pole exponential smoother:
//!
//! ```text
//! value += coefficient * (target - value)
//! ```
//!
//! Every sample closes a fixed fraction of the remaining distance. With
//! the engine's coefficient of `1e-4` at 48 kHz, the time constant is
//! `1 / 1e-4 = 10000` samples (about 200 ms), which turns a change in the
//! delay knob into a short tape-style pitch glide instead of a click.
//!
//! The value is kept in `f64`. At a delay of a few hundred milliseconds,
//! `f32` cannot represent increments this small, and the smoother would
//! stall several samples short of its target.

/// Exponential (one-pole) smoother for a single control value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSmoother {
    /// Fraction of the remaining distance covered per step, in `(0, 1]`.
    coefficient: f64,
    value: f64,
}

impl ExponentialSmoother {
    /// A smoother starting at 0.0 that covers `coefficient` of the
    /// remaining distance on every step.
    pub const fn new(coefficient: f64) -> Self {
        Self {
            coefficient,
            value: 0.0,
        }
    }

    /// Jump straight to `value` with no glide.
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
    }

    /// Take one step toward `target` and return the new value.
    pub fn next(&mut self, target: f64) -> f64 {
        self.value += self.coefficient * (target - self.value);
        self.value
    }
}
