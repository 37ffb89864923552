//! Brightness evaluators with compile-time known variants
//!
//! All built-in evaluators are stored in an enum to avoid heap
//! allocations. Each evaluator implements the [`BrightnessEval`] trait.

mod blink;
mod breathe;
mod candle;
mod constant;
mod fade;

pub use blink::BlinkEval;
pub use breathe::BreatheEval;
pub use candle::CandleEval;
pub use constant::ConstantEval;
pub use fade::{FadeOffEval, FadeOnEval};

/// Computes the brightness of an effect at a point in time
///
/// `eval` is called with `t` in `[0, period)`; `eval(period - 1)` yields
/// the effect's terminal value, which the controller holds during
/// delay-after and after the effect finishes. Implementations must not
/// depend on being called in time order; the mutable receiver exists only
/// to permit memoization, as the candle evaluator does.
pub trait BrightnessEval {
    /// Length of one effect cycle in time units, excluding delay-after
    fn period(&self) -> u16;

    /// Brightness at time `t` of the cycle
    fn eval(&mut self, t: u32) -> u8;
}

/// Evaluator slot - enum containing all built-in evaluators
#[derive(Debug, Clone)]
pub enum EvalSlot {
    /// Constant brightness (on/off)
    Constant(ConstantEval),
    /// On-off cycle
    Blink(BlinkEval),
    /// Fade from zero to full brightness
    FadeOn(FadeOnEval),
    /// Fade from full brightness to zero
    FadeOff(FadeOffEval),
    /// Fade in, hold, fade out
    Breathe(BreatheEval),
    /// Pseudo-random candle flicker
    Candle(CandleEval),
}

impl BrightnessEval for EvalSlot {
    fn period(&self) -> u16 {
        match self {
            Self::Constant(eval) => eval.period(),
            Self::Blink(eval) => eval.period(),
            Self::FadeOn(eval) => eval.period(),
            Self::FadeOff(eval) => eval.period(),
            Self::Breathe(eval) => eval.period(),
            Self::Candle(eval) => eval.period(),
        }
    }

    fn eval(&mut self, t: u32) -> u8 {
        match self {
            Self::Constant(eval) => eval.eval(t),
            Self::Blink(eval) => eval.eval(t),
            Self::FadeOn(eval) => eval.eval(t),
            Self::FadeOff(eval) => eval.eval(t),
            Self::Breathe(eval) => eval.eval(t),
            Self::Candle(eval) => eval.eval(t),
        }
    }
}
