//! Small deterministic PRNG for flicker effects
//!
//! A 32-bit linear feedback shift register. Each instance owns its own
//! state, so two candle effects seeded differently flicker independently.

const LFSR_TAPS: u32 = 0x7FFF_F159;
const DEFAULT_SEED: u32 = 0xA5A5_5A5A;

/// 8-bit pseudo-random generator backed by a 32-bit LFSR
#[derive(Debug, Clone)]
pub struct Rand8 {
    state: u32,
}

impl Rand8 {
    /// Create a generator from the given seed
    ///
    /// A zero seed is remapped to a fixed non-zero default, since the LFSR
    /// would otherwise lock at zero.
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    /// Return the next pseudo-random byte
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u8(&mut self) -> u8 {
        if self.state & 1 != 0 {
            self.state >>= 1;
        } else {
            self.state = (self.state >> 1) ^ LFSR_TAPS;
        }
        self.state as u8
    }
}

impl Default for Rand8 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
