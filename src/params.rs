//! # Plugin Parameters
//!
//! The four controls the host exposes and automates. The plugin reads
//! each of them once per sample frame and hands the values straight to
//! the [`DelayEngine`](crate::DelayEngine).
//!
//! Once published, never change the `#[id = "..."]` strings or existing
//! host sessions will lose their automation.
//!
//! ## Smoothing
//!
//! Delay time is deliberately left unsmoothed here. The engine runs its
//! own exponential glide on it, and stacking a second smoother on top
//! would change the feel of a delay-time sweep. Feedback, mix, and cutoff
//! use a short linear ramp to keep automation free of zipper noise.

use nih_plug::prelude::*;

/// Longest selectable delay time. The delay buffers are sized from this.
pub const MAX_DELAY_MS: f32 = 2000.0;

/// Highest selectable feedback. Anything at or above 1.0 would make the
/// repeats grow forever.
pub const MAX_FEEDBACK: f32 = 0.98;

#[derive(Params)]
pub struct DelayParams {
    /// **Delay Time** in milliseconds, 0 to 2000. Default 200 ms.
    #[id = "time"]
    pub delay_time: FloatParam,

    /// **Feedback**: how much of the filtered echo is fed back into the
    /// delay line. Capped at 98%.
    #[id = "fdbk"]
    pub feedback: FloatParam,

    /// **Mix**: 0% is the dry input only, 100% the delayed signal only.
    #[id = "mix"]
    pub mix: FloatParam,

    /// **Filter Cutoff** of the lowpass on the delayed signal. The default
    /// of 20 kHz leaves the repeats essentially unfiltered.
    #[id = "cutoff"]
    pub filter_cutoff: FloatParam,
}

impl Default for DelayParams {
    fn default() -> Self {
        Self {
            delay_time: FloatParam::new(
                "Delay Time",
                200.0,
                FloatRange::Skewed {
                    min: 0.0,
                    max: MAX_DELAY_MS,
                    factor: FloatRange::skew_factor(-1.0),
                },
            )
            .with_unit(" ms")
            .with_smoother(SmoothingStyle::None)
            .with_step_size(0.1),

            feedback: FloatParam::new(
                "Feedback",
                0.5,
                FloatRange::Linear {
                    min: 0.0,
                    max: MAX_FEEDBACK,
                },
            )
            .with_unit("%")
            .with_smoother(SmoothingStyle::Linear(20.0))
            .with_value_to_string(formatters::v2s_f32_percentage(1))
            .with_string_to_value(formatters::s2v_f32_percentage()),

            mix: FloatParam::new("Mix", 0.5, FloatRange::Linear { min: 0.0, max: 1.0 })
                .with_unit("%")
                .with_smoother(SmoothingStyle::Linear(20.0))
                .with_value_to_string(formatters::v2s_f32_percentage(1))
                .with_string_to_value(formatters::s2v_f32_percentage()),

            filter_cutoff: FloatParam::new(
                "Filter Cutoff",
                20000.0,
                FloatRange::Skewed {
                    min: 20.0,
                    max: 20000.0,
                    // Frequency perception is roughly logarithmic, so give
                    // the low end most of the knob travel.
                    factor: FloatRange::skew_factor(-2.0),
                },
            )
            .with_unit(" Hz")
            .with_smoother(SmoothingStyle::Linear(20.0))
            .with_step_size(0.1),
        }
    }
}
