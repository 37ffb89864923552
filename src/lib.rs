#![no_std]

//! Non-blocking LED and PWM effect library.
//!
//! Drives single-channel brightness effects (blink, fade, breathe, candle
//! flicker, user-defined curves) from a cooperative control loop: no heap,
//! no threads, only a monotonically increasing 32-bit millisecond clock.
//!
//! ```ignore
//! let mut led = Led::new(pwm_pin).breathe(2000).delay_after(500).forever();
//!
//! loop {
//!     led.update(millis());
//! }
//! ```

pub mod eval;
pub mod led;
pub mod math;
pub mod rand;
pub mod scheduler;
pub mod sequence;

pub use eval::{
    BlinkEval, BreatheEval, BrightnessEval, CandleEval, ConstantEval, EvalSlot, FadeOffEval,
    FadeOnEval,
};
pub use led::{Led, Paused, StopMode, REPEAT_FOREVER};
pub use rand::Rand8;
pub use scheduler::{EmbassyClock, TickResult, UpdateScheduler};
pub use sequence::{Mode, Sequence};

pub use embassy_time::{Duration, Instant};

/// Abstract brightness sink trait
///
/// Implement this trait to support different hardware platforms. The
/// effect controller is generic over this trait; writes happen on every
/// update tick, so implementations should be cheap and idempotent.
pub trait PwmSink {
    /// Write a brightness value to the actuator
    fn write(&mut self, value: u8);
}

/// Brightness sink with a native 16-bit resolution
pub trait PwmSink16 {
    /// Write a 16-bit brightness value to the actuator
    fn write(&mut self, value: u16);
}

/// Adapter driving a 16-bit sink from the 8-bit effect domain
///
/// Widens values with [`math::widen8`], so 0 maps to 0 and 255 maps to
/// 65535.
pub struct Widen<S: PwmSink16>(pub S);

impl<S: PwmSink16> PwmSink for Widen<S> {
    fn write(&mut self, value: u8) {
        self.0.write(math::widen8(value));
    }
}

/// Monotonic millisecond clock
///
/// `now` increases monotonically except for a single well-defined
/// wraparound back to 0; the controllers absorb the wraparound.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch
    fn now(&self) -> u32;
}
