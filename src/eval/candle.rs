//! Candle flicker effect
//!
//! Pseudo-random flicker modeled after the measured behavior of a real
//! candle: mostly full brightness with occasional dips to ember levels.
//! The sampled value is memoized per time bucket so repeated evaluation of
//! the same tick is stable.

use super::BrightnessEval;
use crate::math::FULL;
use crate::rand::Rand8;

const DEFAULT_LAST: u8 = 5;

/// Candle evaluator with owned PRNG state
///
/// `speed` selects the bucket width as a power of two (`t >> speed`), so a
/// higher speed flickers more slowly; speeds of 31 and above collapse the
/// whole period into a single bucket. `jitter` is the dip probability in
/// 1/255 steps; zero means a steady full-brightness flame.
#[derive(Debug, Clone)]
pub struct CandleEval {
    speed: u8,
    jitter: u8,
    period: u16,
    rng: Rand8,
    last: u8,
    last_bucket: u32,
}

impl CandleEval {
    /// Create a candle evaluator
    pub const fn new(speed: u8, jitter: u8, period: u16) -> Self {
        Self {
            speed,
            jitter,
            period,
            rng: Rand8::new(0),
            last: DEFAULT_LAST,
            last_bucket: u32::MAX,
        }
    }

    /// Seed the internal generator for a reproducible flicker pattern
    #[must_use]
    pub const fn with_seed(mut self, seed: u32) -> Self {
        self.rng = Rand8::new(seed);
        self
    }
}

impl BrightnessEval for CandleEval {
    fn period(&self) -> u16 {
        self.period
    }

    fn eval(&mut self, t: u32) -> u8 {
        if self.jitter == 0 {
            return FULL;
        }

        // clamp so oversized speeds degrade to one bucket instead of a
        // full-width shift
        let bucket = t >> self.speed.min(31);
        if bucket == self.last_bucket {
            return self.last;
        }
        self.last_bucket = bucket;

        let r = self.rng.next_u8();
        self.last = if r >= self.jitter {
            FULL
        } else {
            r.saturating_mul(2)
        };
        self.last
    }
}
