//! # Delay Engine
//!
//! Ties the ring buffer, the time smoother, and the feedback filter into
//! the complete effect. One [`DelayEngine`] owns one `ChannelState` per
//! audio channel; nothing is shared between channels, so each channel can
//! be processed on its own.
//!
//! ## Per-Sample Algorithm
//!
//! ```text
//! 1. filter.cutoff  ← cutoff_hz                       (every sample)
//! 2. smoothed      += 1e-4 * (target - smoothed)
//!    delay_samples  = sample_rate * smoothed
//! 3. buffer[write]  = input + feedback
//! 4. read_pos       = write - delay_samples  (+ capacity if negative)
//! 5. delayed        = lerp(buffer[i0], buffer[i1], frac)
//! 6. filtered       = lowpass(delayed)
//! 7. feedback       = feedback_gain * filtered        (used next sample)
//! 8. write          = (write + 1) % capacity
//! 9. output         = input * (1 - mix) + filtered * mix
//! ```
//!
//! ## Caller Contract
//!
//! The engine does no range checking on the control values beyond keeping
//! buffer reads in bounds. In particular there is no limiter in the
//! feedback path: a feedback gain of 1.0 or more makes the repeats grow
//! without bound. The host layer is responsible for clamping controls to
//! their documented ranges.

use std::num::NonZeroUsize;

use nih_plug::{nih_debug_assert, nih_log};

use super::delay_line::DelayLine;
use super::filter::OnePoleFilter;
use super::smoother::ExponentialSmoother;
use crate::error::ConfigureError;

/// Channel count of the default (stereo) engine.
pub const NUM_CHANNELS: usize = 2;

/// Per-sample smoothing coefficient for the delay time.
pub const DELAY_TIME_DECAY: f64 = 1e-4;

/// Everything one channel needs to run the delay.
#[derive(Debug, Clone)]
struct ChannelState {
    delay_line: DelayLine,
    filter: OnePoleFilter,

    /// Filtered output of the previous sample times the feedback gain.
    /// Added to the input on the next write.
    feedback: f32,

    /// Each channel smooths its own copy of the delay time. All copies are
    /// driven by the same target, so they stay in lockstep.
    delay_time: ExponentialSmoother,
}

impl ChannelState {
    fn new() -> Self {
        Self {
            delay_line: DelayLine::empty(),
            filter: OnePoleFilter::new(),
            feedback: 0.0,
            delay_time: ExponentialSmoother::new(DELAY_TIME_DECAY),
        }
    }

    /// Return to silence and snap the smoothed delay time to `delay_seconds`.
    fn clear(&mut self, delay_seconds: f64) {
        self.delay_line.clear();
        self.filter.reset();
        self.feedback = 0.0;
        self.delay_time.set_immediate(delay_seconds);
    }
}

/// A multi-channel feedback delay with smoothed delay time and a lowpass
/// filter in the feedback path.
///
/// Create it with [`new()`](Self::new) or [`stereo()`](Self::stereo), call
/// [`configure()`](Self::configure) once the sample rate is known, then
/// call [`process_sample()`](Self::process_sample) for every sample of
/// every channel.
#[derive(Debug, Clone)]
pub struct DelayEngine {
    channels: Vec<ChannelState>,
    sample_rate: f32,

    /// The most recent delay target in seconds. Reconfiguring snaps the
    /// smoothers here instead of gliding up from zero.
    target_delay_seconds: f64,
}

impl Default for DelayEngine {
    fn default() -> Self {
        Self::stereo()
    }
}

impl DelayEngine {
    /// Create an unconfigured engine for `num_channels` channels. Until
    /// [`configure()`](Self::configure) succeeds, the wet signal is silent.
    pub fn new(num_channels: usize) -> Self {
        Self {
            channels: (0..num_channels).map(|_| ChannelState::new()).collect(),
            sample_rate: 0.0,
            target_delay_seconds: 0.0,
        }
    }

    /// Unconfigured engine with [`NUM_CHANNELS`] channels.
    pub fn stereo() -> Self {
        Self::new(NUM_CHANNELS)
    }

    /// Number of channels `process_sample()` accepts.
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Ring buffer length in samples, or 0 before the first successful
    /// [`configure()`](Self::configure).
    pub fn capacity(&self) -> usize {
        self.channels
            .first()
            .map_or(0, |channel| channel.delay_line.capacity())
    }

    /// Sample rate from the last successful configuration, or 0.0.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// True once a [`configure()`](Self::configure) call has succeeded.
    pub fn is_configured(&self) -> bool {
        self.capacity() > 0
    }

    /// Allocate and zero the delay buffers for `sample_rate` and a maximum
    /// delay of `max_delay_ms`.
    ///
    /// The buffer holds `ceil(sample_rate * max_delay_ms / 1000)` samples.
    /// Feedback and filter state are zeroed and the smoothed delay time
    /// snaps to the current target. Calling this again is a full reset.
    ///
    /// On error nothing changes: the new buffers are built first and only
    /// swapped in once every channel's allocation has succeeded.
    pub fn configure(&mut self, sample_rate: f32, max_delay_ms: f32) -> Result<(), ConfigureError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(ConfigureError::InvalidSampleRate(sample_rate));
        }
        if !(max_delay_ms.is_finite() && max_delay_ms > 0.0) {
            return Err(ConfigureError::InvalidMaxDelay(max_delay_ms));
        }

        let capacity = buffer_capacity(sample_rate, max_delay_ms);
        let capacity_nonzero =
            NonZeroUsize::new(capacity).ok_or(ConfigureError::InvalidMaxDelay(max_delay_ms))?;

        let delay_lines = self
            .channels
            .iter()
            .map(|_| DelayLine::try_new(capacity_nonzero))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigureError::Allocation { capacity, source })?;

        for (channel, delay_line) in self.channels.iter_mut().zip(delay_lines) {
            channel.delay_line = delay_line;
            channel.clear(self.target_delay_seconds);
        }
        self.sample_rate = sample_rate;
        nih_debug_assert!(
            self.delay_target_in_range(self.target_delay_seconds),
            "delay time {}s exceeds the configured buffer",
            self.target_delay_seconds
        );

        nih_log!(
            "Delay engine configured: {} channel(s), {} samples at {} Hz",
            self.channels.len(),
            capacity,
            sample_rate
        );

        Ok(())
    }

    /// Set the delay target and jump every channel's smoothed delay time
    /// to it, skipping the glide.
    pub fn set_delay_time_immediate(&mut self, delay_seconds: f32) {
        self.target_delay_seconds = f64::from(delay_seconds);
        nih_debug_assert!(
            !self.is_configured() || self.delay_target_in_range(self.target_delay_seconds),
            "delay time {}s exceeds the configured buffer",
            delay_seconds
        );
        for channel in &mut self.channels {
            channel.delay_time.set_immediate(self.target_delay_seconds);
        }
    }

    /// Silence all buffers and state without reallocating.
    pub fn reset(&mut self) {
        for channel in &mut self.channels {
            channel.clear(self.target_delay_seconds);
        }
    }

    /// Run one sample of `channel` through the delay and return the
    /// wet/dry blend.
    ///
    /// * `target_delay_seconds` - must be in `[0, max_delay_ms / 1000]`.
    /// * `feedback_gain` - must stay below 1.0 for the echoes to decay.
    /// * `mix` - 0.0 is fully dry, 1.0 fully wet.
    /// * `cutoff_hz` - lowpass cutoff for the delayed signal.
    ///
    /// For an unknown channel or an unconfigured engine, only the dry part
    /// `input * (1 - mix)` is returned.
    pub fn process_sample(
        &mut self,
        channel: usize,
        input: f32,
        target_delay_seconds: f32,
        feedback_gain: f32,
        mix: f32,
        cutoff_hz: f32,
    ) -> f32 {
        let dry = input * (1.0 - mix);
        let sample_rate = self.sample_rate;
        let target = f64::from(target_delay_seconds);
        // Checked only when the target moves so a stuck out-of-range value
        // logs once instead of on every sample.
        if target != self.target_delay_seconds {
            self.target_delay_seconds = target;
            nih_debug_assert!(
                !self.is_configured() || self.delay_target_in_range(target),
                "delay time {}s exceeds the configured buffer",
                target
            );
        }

        let Some(state) = self.channels.get_mut(channel) else {
            nih_debug_assert!(false, "channel {} out of range", channel);
            return dry;
        };
        if state.delay_line.is_empty() {
            return dry;
        }

        state.filter.set_cutoff(cutoff_hz, sample_rate);

        let smoothed = state.delay_time.next(target);
        let delay_samples = f64::from(sample_rate) * smoothed;

        state.delay_line.write(input + state.feedback);
        let delayed = state.delay_line.read(delay_samples);
        let filtered = state.filter.process(delayed);

        state.feedback = feedback_gain * filtered;
        state.delay_line.advance();

        dry + filtered * mix
    }

    /// Whether `delay_seconds` fits the configured buffer, i.e. lies in
    /// `[0, capacity / sample_rate]`.
    fn delay_target_in_range(&self, delay_seconds: f64) -> bool {
        delay_seconds >= 0.0
            && delay_seconds * f64::from(self.sample_rate) <= self.capacity() as f64
    }
}

/// `ceil(sample_rate * max_delay_ms / 1000)`, saturating at `usize::MAX`.
fn buffer_capacity(sample_rate: f32, max_delay_ms: f32) -> usize {
    (f64::from(sample_rate) * f64::from(max_delay_ms) / 1000.0).ceil() as usize
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 48000.0;
    const MAX_DELAY_MS: f32 = 2000.0;

    /// 3000 samples at 48 kHz. 0.0625 is exact in binary, so the read
    /// position never has a fractional part.
    const WHOLE_SAMPLE_DELAY: f32 = 0.0625;
    const WHOLE_SAMPLE_DELAY_SAMPLES: usize = 3000;

    fn configured(delay_seconds: f32) -> DelayEngine {
        let mut engine = DelayEngine::stereo();
        engine.configure(SAMPLE_RATE, MAX_DELAY_MS).unwrap();
        engine.set_delay_time_immediate(delay_seconds);
        engine
    }

    /// Deterministic noise in [-1, 1).
    fn noise(len: usize) -> Vec<f32> {
        let mut seed = 0x1234_5678_u32;
        (0..len)
            .map(|_| {
                seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (seed >> 8) as f32 / (1u32 << 23) as f32 - 1.0
            })
            .collect()
    }

    fn impulse(len: usize) -> Vec<f32> {
        let mut signal = vec![0.0; len];
        signal[0] = 1.0;
        signal
    }

    fn run(
        engine: &mut DelayEngine,
        channel: usize,
        input: &[f32],
        delay_seconds: f32,
        feedback: f32,
        mix: f32,
        cutoff: f32,
    ) -> Vec<f32> {
        input
            .iter()
            .map(|&x| engine.process_sample(channel, x, delay_seconds, feedback, mix, cutoff))
            .collect()
    }

    #[test]
    fn test_capacity_from_sample_rate_and_max_delay() {
        let mut engine = DelayEngine::stereo();
        assert_eq!(engine.capacity(), 0);
        assert!(!engine.is_configured());

        engine.configure(48000.0, 2000.0).unwrap();
        assert_eq!(engine.capacity(), 96000);
        assert_eq!(engine.num_channels(), 2);
        assert!(engine.is_configured());

        engine.configure(44100.0, 2000.0).unwrap();
        assert_eq!(engine.capacity(), 88200);

        // 1000 Hz * 2.5 ms = 2.5 samples, rounded up.
        engine.configure(1000.0, 2.5).unwrap();
        assert_eq!(engine.capacity(), 3);
    }

    #[test]
    fn test_silence_in_silence_out() {
        for (sample_rate, max_delay) in [(44100.0, 2000.0), (48000.0, 500.0), (96000.0, 10.0)] {
            let mut engine = DelayEngine::stereo();
            engine.configure(sample_rate, max_delay).unwrap();

            for channel in 0..2 {
                for &(delay, feedback, mix, cutoff) in
                    &[(0.0, 0.98, 1.0, 20.0), (0.005, 0.5, 0.5, 20000.0), (0.01, 0.0, 0.3, 800.0)]
                {
                    for _ in 0..2000 {
                        let output = engine.process_sample(channel, 0.0, delay, feedback, mix, cutoff);
                        assert_eq!(output, 0.0, "silence should stay silent");
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_mix_is_exact_dry_passthrough() {
        let mut engine = configured(0.01);
        let input = noise(20000);

        for (delay, feedback, cutoff) in [(0.01, 0.98, 20.0), (0.3, 0.5, 20000.0), (0.0, 0.0, 1000.0)] {
            let output = run(&mut engine, 0, &input, delay, feedback, 0.0, cutoff);
            assert_eq!(output, input, "mix = 0 must return the input unchanged");
        }
    }

    /// With mix = 1 and no feedback, the output is the input delayed by
    /// exactly `delay_samples` and run through the lowpass once.
    #[test]
    fn test_full_wet_is_filtered_delayed_input() {
        let mut engine = configured(WHOLE_SAMPLE_DELAY);
        let input = noise(10000);
        let cutoff = 5000.0;

        let output = run(&mut engine, 0, &input, WHOLE_SAMPLE_DELAY, 0.0, 1.0, cutoff);

        let mut reference = OnePoleFilter::new();
        for (n, &actual) in output.iter().enumerate() {
            let delayed = n
                .checked_sub(WHOLE_SAMPLE_DELAY_SAMPLES)
                .map_or(0.0, |i| input[i]);
            reference.set_cutoff(cutoff, SAMPLE_RATE);
            let expected = reference.process(delayed);
            assert!(
                (actual - expected).abs() < 1e-6,
                "sample {n}: expected {expected}, got {actual}"
            );
        }
    }

    /// A fractional delay blends the two neighbouring input samples before
    /// filtering. At 1024 Hz both delays below are exact in binary, so
    /// `delay_samples` is exactly 480.5 and 480.25.
    #[test]
    fn test_full_wet_interpolates_fractional_delay() {
        let sample_rate = 1024.0;
        let cutoff = 300.0;
        let input = noise(3000);

        for delay_samples in [480.5_f32, 480.25] {
            let delay_seconds = delay_samples / sample_rate;
            let mut engine = DelayEngine::stereo();
            engine.configure(sample_rate, 1000.0).unwrap();
            engine.set_delay_time_immediate(delay_seconds);

            let output = run(&mut engine, 0, &input, delay_seconds, 0.0, 1.0, cutoff);

            // read_pos = n - d = (n - whole - 1) + (1 - fraction), so the
            // older neighbour is weighted by `fraction`.
            let whole = delay_samples.floor() as usize;
            let fraction = delay_samples - whole as f32;
            let at = |n: usize, back: usize| n.checked_sub(back).map_or(0.0, |i| input[i]);

            let mut reference = OnePoleFilter::new();
            for (n, &actual) in output.iter().enumerate() {
                let older = at(n, whole + 1);
                let newer = at(n, whole);
                let blended = older * fraction + newer * (1.0 - fraction);
                reference.set_cutoff(cutoff, sample_rate);
                let expected = reference.process(blended);
                assert!(
                    (actual - expected).abs() < 1e-5,
                    "delay {delay_samples}, sample {n}: expected {expected}, got {actual}"
                );
            }
        }
    }

    #[test]
    fn test_impulse_peak_at_200ms() {
        let mut engine = configured(0.2);
        assert_eq!(engine.capacity(), 96000);

        let output = run(&mut engine, 0, &impulse(12000), 0.2, 0.0, 1.0, 20000.0);

        let (peak_index, peak) = output
            .iter()
            .enumerate()
            .skip(1)
            .fold((0, 0.0_f32), |best, (i, &y)| if y.abs() > best.1 { (i, y.abs()) } else { best });

        assert!(
            (9599..=9601).contains(&peak_index),
            "Expected the echo near sample 9600, got {peak_index}"
        );
        assert!(peak > 0.5, "Near-bypass filter should keep most of the echo, got {peak}");
        assert!(
            output[1..9590].iter().all(|&y| y == 0.0),
            "Nothing should come out before the echo"
        );
    }

    /// A new target is reached by gliding. Moving from 100 ms to 200 ms,
    /// the read head catches the impulse while the delay is still between
    /// the two.
    #[test]
    fn test_delay_time_glides_toward_target() {
        let mut engine = configured(0.1);

        let output = run(&mut engine, 0, &impulse(12000), 0.2, 0.0, 1.0, 20000.0);
        let first_echo = output
            .iter()
            .skip(1)
            .position(|&y| y.abs() > 1e-3)
            .map(|i| i + 1)
            .expect("the impulse should echo within 12000 samples");

        assert!(
            first_echo > 4800 && first_echo < 9600,
            "Gliding delay should echo between 4800 and 9600, got sample {first_echo}"
        );
    }

    #[test]
    fn test_feedback_repeats_decay() {
        let feedback = 0.5;
        let period = WHOLE_SAMPLE_DELAY_SAMPLES;
        let mut engine = configured(WHOLE_SAMPLE_DELAY);

        let output = run(
            &mut engine,
            0,
            &impulse(period * 11),
            WHOLE_SAMPLE_DELAY,
            feedback,
            1.0,
            20000.0,
        );

        let repeat_peak = |k: usize| {
            output[k * period - 10..k * period + period / 2]
                .iter()
                .fold(0.0_f32, |peak, &y| peak.max(y.abs()))
        };

        let mut previous = repeat_peak(1);
        assert!(previous > 0.5 && previous <= 1.0, "first repeat peak {previous}");

        for k in 2..=10 {
            let peak = repeat_peak(k);
            assert!(
                peak <= previous * feedback * 1.1,
                "repeat {k}: peak {peak} should be at most {feedback} x {previous}"
            );
            previous = peak;
        }
        assert!(previous < 1e-2, "Repeats should die away, got {previous}");
    }

    #[test]
    fn test_feedback_below_one_stays_bounded() {
        let mut engine = configured(0.0025);
        let input = vec![1.0; 200_000];

        let output = run(&mut engine, 0, &input, 0.0025, 0.98, 1.0, 20000.0);

        // A DC input settles at 1 / (1 - 0.98) = 50.
        let max = output.iter().fold(0.0_f32, |m, &y| m.max(y.abs()));
        assert!(output.iter().all(|y| y.is_finite()));
        assert!(max < 55.0, "Feedback 0.98 should stay bounded, got {max}");
    }

    /// There is no limiter: a gain above one keeps growing.
    #[test]
    fn test_feedback_above_one_runs_away() {
        let mut engine = configured(0.0025);
        let input = vec![1.0; 5000];

        let output = run(&mut engine, 0, &input, 0.0025, 1.5, 1.0, 20000.0);

        let last = output.last().copied().unwrap_or_default();
        assert!(last.abs() > 1000.0, "Feedback 1.5 should grow, got {last}");
    }

    #[test]
    fn test_reconfigure_gives_identical_output() {
        let input = noise(8000);
        let args = (0.01, 0.7, 0.5, 3000.0);

        let mut engine = configured(args.0);
        let first = run(&mut engine, 0, &input, args.0, args.1, args.2, args.3);

        engine.configure(SAMPLE_RATE, MAX_DELAY_MS).unwrap();
        let second = run(&mut engine, 0, &input, args.0, args.1, args.2, args.3);
        assert_eq!(first, second);

        let mut twice = configured(args.0);
        twice.configure(SAMPLE_RATE, MAX_DELAY_MS).unwrap();
        let third = run(&mut twice, 0, &input, args.0, args.1, args.2, args.3);
        assert_eq!(first, third);
    }

    #[test]
    fn test_reset_silences_echoes() {
        let mut engine = configured(0.001);

        run(&mut engine, 1, &noise(1000), 0.001, 0.9, 1.0, 8000.0);
        engine.reset();

        let output = run(&mut engine, 1, &vec![0.0; 5000], 0.001, 0.9, 1.0, 8000.0);
        assert!(output.iter().all(|&y| y == 0.0), "Reset should flush the buffer");
    }

    #[test]
    fn test_channels_are_independent() {
        let mut engine = configured(0.001);

        for (n, x) in impulse(2000).into_iter().enumerate() {
            let left = engine.process_sample(0, x, 0.001, 0.8, 1.0, 20000.0);
            let right = engine.process_sample(1, 0.0, 0.001, 0.8, 1.0, 20000.0);
            assert_eq!(right, 0.0, "right channel picked up left audio at {n}");
            if n == 48 {
                assert!(left.abs() > 0.5, "left channel should echo at 48, got {left}");
            }
        }
    }

    #[test]
    fn test_delay_at_or_past_capacity_stays_in_bounds() {
        let mut engine = DelayEngine::stereo();
        engine.configure(1000.0, 10.0).unwrap();
        assert_eq!(engine.capacity(), 10);

        // 0.01 s = exactly the capacity; the others step outside the contract.
        for delay in [0.0, 0.0099, 0.01, 0.0105, 0.05] {
            engine.set_delay_time_immediate(delay);
            let output = run(&mut engine, 0, &noise(100), delay, 0.9, 0.5, 300.0);
            assert!(output.iter().all(|y| y.is_finite()), "delay {delay}");
        }
    }

    #[test]
    fn test_failed_configure_keeps_previous_state() {
        let mut engine = configured(WHOLE_SAMPLE_DELAY);
        let period = WHOLE_SAMPLE_DELAY_SAMPLES;

        engine.process_sample(0, 1.0, WHOLE_SAMPLE_DELAY, 0.0, 1.0, 20000.0);

        let error = engine.configure(SAMPLE_RATE, 1e30).unwrap_err();
        assert!(
            matches!(error, ConfigureError::Allocation { .. }),
            "Expected an allocation error, got {error:?}"
        );
        assert_eq!(engine.capacity(), 96000);
        assert_eq!(engine.sample_rate(), SAMPLE_RATE);

        // The impulse written before the failure still comes back.
        let output = run(&mut engine, 0, &vec![0.0; period], WHOLE_SAMPLE_DELAY, 0.0, 1.0, 20000.0);
        assert!(output[period - 1].abs() > 0.5, "echo lost after failed configure");
    }

    /// At 40 Hz the Nyquist limit (19.6 Hz) sits below the filter's 20 Hz
    /// floor. Configuring must succeed and processing must not panic.
    #[test]
    fn test_tiny_sample_rate_processes_without_panicking() {
        let mut engine = DelayEngine::stereo();
        engine.configure(40.0, 1000.0).unwrap();
        assert_eq!(engine.capacity(), 40);

        engine.set_delay_time_immediate(0.5);
        let output = run(&mut engine, 0, &impulse(100), 0.5, 0.5, 1.0, 1000.0);
        assert!(output.iter().all(|y| y.is_finite()));
        assert!(output[20].abs() > 0.0, "the impulse should echo after 20 samples");
    }

    #[test]
    fn test_delay_target_range() {
        let mut engine = DelayEngine::stereo();
        engine.configure(1000.0, 10.0).unwrap();

        assert!(engine.delay_target_in_range(0.0));
        assert!(engine.delay_target_in_range(0.005));
        assert!(engine.delay_target_in_range(0.01));
        assert!(!engine.delay_target_in_range(0.0105));
        assert!(!engine.delay_target_in_range(-0.001));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let mut engine = DelayEngine::stereo();

        for sample_rate in [0.0, -44100.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                engine.configure(sample_rate, 2000.0),
                Err(ConfigureError::InvalidSampleRate(_))
            ));
        }
        for max_delay in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                engine.configure(48000.0, max_delay),
                Err(ConfigureError::InvalidMaxDelay(_))
            ));
        }
        assert!(!engine.is_configured());
    }

    #[test]
    fn test_unconfigured_engine_returns_dry_signal() {
        let mut engine = DelayEngine::stereo();

        let output = engine.process_sample(0, 0.8, 0.1, 0.5, 0.25, 1000.0);
        assert!((output - 0.6).abs() < 1e-6, "Expected 0.6, got {output}");

        let mut stereo = configured(0.1);
        let output = stereo.process_sample(7, 0.8, 0.1, 0.5, 0.25, 1000.0);
        assert!((output - 0.6).abs() < 1e-6, "Expected 0.6, got {output}");
    }
}
