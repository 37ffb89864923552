//! Fade-on and fade-off effects
//!
//! Both use the shared exponential-sine approximation from [`crate::math`];
//! fade-off is the time-mirrored fade-on.

use super::BrightnessEval;
use crate::math::fade_on;

/// Fade the LED from zero to full brightness
#[derive(Debug, Clone, Copy)]
pub struct FadeOnEval {
    period: u16,
}

impl FadeOnEval {
    /// Create a fade-on evaluator with the given duration
    pub const fn new(period: u16) -> Self {
        Self { period }
    }
}

impl BrightnessEval for FadeOnEval {
    fn period(&self) -> u16 {
        self.period
    }

    fn eval(&mut self, t: u32) -> u8 {
        fade_on(t, self.period)
    }
}

/// Fade the LED from full brightness to zero
#[derive(Debug, Clone, Copy)]
pub struct FadeOffEval {
    period: u16,
}

impl FadeOffEval {
    /// Create a fade-off evaluator with the given duration
    pub const fn new(period: u16) -> Self {
        Self { period }
    }
}

impl BrightnessEval for FadeOffEval {
    fn period(&self) -> u16 {
        self.period
    }

    fn eval(&mut self, t: u32) -> u8 {
        fade_on(u32::from(self.period).saturating_sub(t), self.period)
    }
}
