//! Breathe effect
//!
//! Composite of a rising fade, a full-brightness plateau and a mirrored
//! falling fade, optionally mapped into a `[from, to]` brightness range.

use super::BrightnessEval;
use crate::math::{fade_on, lerp8, FULL, ZERO};

/// Breathe evaluator: fade in, hold, fade out
#[derive(Debug, Clone, Copy)]
pub struct BreatheEval {
    duration_fade_on: u16,
    duration_on: u16,
    duration_fade_off: u16,
    from: u8,
    to: u8,
}

impl BreatheEval {
    /// Create a symmetric breathe over the given period
    ///
    /// The period is split into equal fade-on and fade-off halves with no
    /// plateau, spanning the full brightness range.
    pub const fn new(period: u16) -> Self {
        let half = period >> 1;
        Self::with_segments(half, period - 2 * half, half)
    }

    /// Create a breathe with explicit fade-on, plateau and fade-off times
    pub const fn with_segments(
        duration_fade_on: u16,
        duration_on: u16,
        duration_fade_off: u16,
    ) -> Self {
        Self {
            duration_fade_on,
            duration_on,
            duration_fade_off,
            from: ZERO,
            to: FULL,
        }
    }

    /// Map the effect output into the range `[from, to]`
    #[must_use]
    pub const fn with_range(mut self, from: u8, to: u8) -> Self {
        self.from = from;
        self.to = to;
        self
    }
}

impl BrightnessEval for BreatheEval {
    fn period(&self) -> u16 {
        self.duration_fade_on
            .saturating_add(self.duration_on)
            .saturating_add(self.duration_fade_off)
    }

    fn eval(&mut self, t: u32) -> u8 {
        let period = u32::from(self.period());
        let fade_on_end = u32::from(self.duration_fade_on);
        let plateau_end = fade_on_end + u32::from(self.duration_on);

        let raw = if t >= period.saturating_sub(1) {
            ZERO
        } else if t < fade_on_end {
            fade_on(t, self.duration_fade_on)
        } else if t < plateau_end {
            FULL
        } else {
            fade_on(period - t, self.duration_fade_off)
        };

        lerp8(raw, self.from, self.to)
    }
}
