//! Blink effect
//!
//! One on-off cycle per period: full brightness for the on-duration, then
//! zero for the off-duration.

use super::BrightnessEval;
use crate::math::{FULL, ZERO};

/// Blink evaluator with separate on- and off-durations
#[derive(Debug, Clone, Copy)]
pub struct BlinkEval {
    duration_on: u16,
    duration_off: u16,
}

impl BlinkEval {
    /// Create a blink evaluator
    pub const fn new(duration_on: u16, duration_off: u16) -> Self {
        Self {
            duration_on,
            duration_off,
        }
    }
}

impl BrightnessEval for BlinkEval {
    fn period(&self) -> u16 {
        self.duration_on.saturating_add(self.duration_off)
    }

    fn eval(&mut self, t: u32) -> u8 {
        if t < u32::from(self.duration_on) {
            FULL
        } else {
            ZERO
        }
    }
}
