//! # DSP (Digital Signal Processing) Core
//!
//! - **`delay_line`**: the fixed-capacity ring buffer with fractional,
//!   linearly interpolated reads.
//! - **`filter`**: a one-pole TPT lowpass that darkens the repeats.
//! - **`smoother`**: the exponential glide applied to the delay time.
//! - **`engine`**: the complete per-sample delay built from the three
//!   pieces above, one independent state per channel.

pub mod delay_line;
pub mod engine;
pub mod filter;
pub mod smoother;
