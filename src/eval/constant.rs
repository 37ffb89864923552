//! Constant brightness

use super::BrightnessEval;

/// Holds a single brightness value for a one-tick period
///
/// Used for the plain on/off operations; repetition and delay-after on the
/// controller stretch it over time.
#[derive(Debug, Clone, Copy)]
pub struct ConstantEval {
    value: u8,
}

impl ConstantEval {
    /// Create a constant evaluator with the given brightness
    pub const fn new(value: u8) -> Self {
        Self { value }
    }
}

impl BrightnessEval for ConstantEval {
    fn period(&self) -> u16 {
        1
    }

    fn eval(&mut self, _t: u32) -> u8 {
        self.value
    }
}
