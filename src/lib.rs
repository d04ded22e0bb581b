//! # EZ Delay — A VST3/CLAP Feedback Delay
//!
//! A feedback delay built with [nih-plug](https://github.com/robbert-vdh/nih-plug).
//! The DSP lives in [`DelayEngine`], a plain struct with no host coupling;
//! the [`Plugin`] implementation below only reads the parameters and feeds
//! them to the engine one sample at a time.
//!
//! ## Signal Flow
//!
//! ```text
//! Input ──┬──────────────────────────────────────────── × (1 - mix) ──┐
//!         │                                                           │
//!         └──►(+)──► [Ring Buffer] ──► [Lowpass] ──┬──── × mix ──────►(+)──► Output
//!              ▲     (smoothed,        (cutoff     │
//!              │      interpolated      per        │
//!              │      read)             sample)    │
//!              │                                   │
//!              └──────────── × feedback ◄──────────┘
//! ```

pub mod dsp;
pub mod error;
pub mod params;

use std::num::NonZeroU32;
use std::sync::Arc;

use nih_plug::prelude::*;

pub use dsp::engine::{DelayEngine, DELAY_TIME_DECAY, NUM_CHANNELS};
pub use error::ConfigureError;
use params::{DelayParams, MAX_DELAY_MS};

/// The plugin: shared parameters plus the audio-thread-owned engine.
pub struct EzDelay {
    params: Arc<DelayParams>,
    engine: DelayEngine,
}

impl Default for EzDelay {
    fn default() -> Self {
        Self {
            params: Arc::new(DelayParams::default()),
            // Resized for the real channel count in initialize().
            engine: DelayEngine::stereo(),
        }
    }
}

impl Plugin for EzDelay {
    const NAME: &'static str = "EZ Delay";
    const VENDOR: &'static str = "EZ Audio";
    const URL: &'static str = "";
    const EMAIL: &'static str = "";
    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // Stereo first since that is what most tracks are.
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(2),
            main_output_channels: NonZeroU32::new(2),
            aux_input_ports: &[],
            aux_output_ports: &[],
            names: PortNames::const_default(),
        },
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(1),
            main_output_channels: NonZeroU32::new(1),
            aux_input_ports: &[],
            aux_output_ports: &[],
            names: PortNames::const_default(),
        },
    ];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;

    // Parameter values are read once per sample frame, so let automation
    // land on the exact sample too.
    const SAMPLE_ACCURATE_AUTOMATION: bool = true;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    /// Allocate the delay buffers for the host's sample rate and channel
    /// count. This is the only place the plugin allocates.
    fn initialize(
        &mut self,
        audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        let num_channels = audio_io_layout
            .main_input_channels
            .map_or(NUM_CHANNELS, |c| c.get() as usize);

        let mut engine = DelayEngine::new(num_channels);
        if let Err(err) = engine.configure(buffer_config.sample_rate, MAX_DELAY_MS) {
            nih_error!("Failed to set up the delay buffers: {err}");
            return false;
        }

        // Start at the current knob position rather than gliding up from 0.
        engine.set_delay_time_immediate(self.params.delay_time.value() / 1000.0);
        self.engine = engine;

        true
    }

    /// Flush all echoes when the host stops or resets playback.
    fn reset(&mut self) {
        self.engine.reset();
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        let mut delay_ms = self.params.delay_time.value();
        let mut feedback = self.params.feedback.value();

        for mut channel_samples in buffer.iter_samples() {
            delay_ms = self.params.delay_time.smoothed.next();
            feedback = self.params.feedback.smoothed.next();
            let mix = self.params.mix.smoothed.next();
            let cutoff = self.params.filter_cutoff.smoothed.next();

            let delay_seconds = delay_ms / 1000.0;
            for (channel, sample) in channel_samples.iter_mut().enumerate() {
                *sample =
                    self.engine
                        .process_sample(channel, *sample, delay_seconds, feedback, mix, cutoff);
            }
        }

        ProcessStatus::Tail(tail_samples(delay_ms, feedback, self.engine.sample_rate()))
    }
}

/// Samples needed for the echoes to fall below -60 dB.
///
/// Each repeat is scaled by `feedback`, so after `N` repeats the level is
/// `feedback^N`. Solving `feedback^N = 0.001` gives `N = -3 / log10(feedback)`.
/// One extra period covers the first echo itself.
fn tail_samples(delay_ms: f32, feedback: f32, sample_rate: f32) -> u32 {
    let delay_samples = delay_ms * sample_rate / 1000.0;

    let repeats = if feedback > 0.001 {
        -3.0 / feedback.log10()
    } else {
        0.0
    };

    ((repeats + 1.0) * delay_samples) as u32
}

impl ClapPlugin for EzDelay {
    const CLAP_ID: &'static str = "com.ez-audio.ez-delay";
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some("Feedback delay with smoothed delay time and a filtered feedback path");
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Mono,
        ClapFeature::Delay,
    ];
}

impl Vst3Plugin for EzDelay {
    const VST3_CLASS_ID: [u8; 16] = *b"EZAudioEZDelay01";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Delay];
}

nih_export_clap!(EzDelay);
nih_export_vst3!(EzDelay);
