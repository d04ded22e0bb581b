//! # Delay Line (Ring Buffer)
//!
//! A delay line stores audio samples and lets you read them back after a
//! specified time delay. Each channel of the delay engine owns one.
//!
//! ## How the Ring Buffer Is Used
//!
//! The buffer has a fixed capacity chosen when the engine is configured.
//! A write cursor marks the slot for the current sample. For every audio
//! sample the engine:
//!
//! 1. Writes `input + feedback` at the write cursor.
//! 2. Reads back the sample from `write_cursor - delay_samples`, wrapping
//!    into `[0, capacity)` by adding the capacity when the position is
//!    negative.
//! 3. Advances the cursor by 1, wrapping back to 0 at the end.
//!
//! Because the write happens before the read, a delay of 0 samples reads
//! back the sample that was just written.
//!
//! ## Linear Interpolation
//!
//! The smoothed delay time almost never lands on a whole sample, so the
//! read position has an integer part `i0` and a fractional part `frac`.
//! The result blends `i0` with the next slot `i1 = (i0 + 1) % capacity`:
//!
//! ```text
//! result = buffer[i0] * (1 - frac) + buffer[i1] * frac
//! ```
//!
//! `i1` is the *newer* of the two samples, since it sits closer to the
//! write cursor.

use std::collections::TryReserveError;
use std::num::NonZeroUsize;

/// A fixed-capacity ring buffer of `f32` samples.
///
/// The buffer is allocated once in [`try_new()`](Self::try_new) and never
/// resized afterwards, so reading and writing never touch the allocator.
#[derive(Debug, Clone)]
pub struct DelayLine {
    /// The circular sample storage. Starts out as silence.
    buffer: Vec<f32>,

    /// Slot that receives the next written sample. Always in
    /// `[0, capacity)` for a non-empty buffer.
    write_pos: usize,
}

impl DelayLine {
    /// An unallocated delay line. Reads return silence until it is replaced
    /// by one built with [`try_new()`](Self::try_new).
    pub const fn empty() -> Self {
        Self {
            buffer: Vec::new(),
            write_pos: 0,
        }
    }

    /// Allocate a zeroed delay line holding `capacity` samples.
    ///
    /// The allocation is fallible so that an oversized configuration is
    /// reported to the caller instead of aborting the host process.
    pub fn try_new(capacity: NonZeroUsize) -> Result<Self, TryReserveError> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(capacity.get())?;
        // Fits in the reservation above, so this does not allocate again.
        buffer.resize(capacity.get(), 0.0);

        Ok(Self {
            buffer,
            write_pos: 0,
        })
    }

    /// Number of samples the ring buffer holds.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// True for a line made with [`empty()`](Self::empty), which has no
    /// storage and reads back silence.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Store a sample at the current write position.
    ///
    /// This does NOT advance the write position. Call
    /// [`advance()`](Self::advance) once the sample has been read back.
    pub fn write(&mut self, sample: f32) {
        if let Some(slot) = self.buffer.get_mut(self.write_pos) {
            *slot = sample;
        }
    }

    /// Read the sample `delay_samples` behind the write cursor, linearly
    /// interpolating between the two nearest slots.
    ///
    /// Delays are clamped to `[0, capacity - 1]`. A delay of exactly
    /// `capacity` would otherwise land back on the write cursor and behave
    /// like no delay at all.
    pub fn read(&self, delay_samples: f64) -> f32 {
        let len = self.buffer.len();
        if len == 0 {
            return 0.0;
        }

        let delay = delay_samples.clamp(0.0, (len - 1) as f64);

        let mut read_pos = self.write_pos as f64 - delay;
        if read_pos < 0.0 {
            read_pos += len as f64;
        }

        let whole = read_pos.floor();
        let frac = (read_pos - whole) as f32;

        // Rounding can push a position like `-1e-12 + len` up to exactly
        // `len`, which is slot 0 on the ring.
        let mut i0 = whole as usize;
        if i0 >= len {
            i0 -= len;
        }
        let i1 = if i0 + 1 == len { 0 } else { i0 + 1 };

        self.buffer[i0] * (1.0 - frac) + self.buffer[i1] * frac
    }

    /// Move the write cursor forward by one slot, wrapping to 0 at the end.
    pub fn advance(&mut self) {
        self.write_pos += 1;
        if self.write_pos >= self.buffer.len() {
            self.write_pos = 0;
        }
    }

    /// Zero the buffer and move the write cursor back to the start.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
