//! Per-LED effect controller
//!
//! The controller drives a single brightness channel through a configured
//! effect: it anchors the effect on the first update, maps evaluator output
//! into the configured brightness range and tracks repetition, the
//! delay-before/after windows and pause state. All time arithmetic is safe
//! across the 32-bit wraparound of the millisecond clock.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::eval::{
    BlinkEval, BreatheEval, BrightnessEval, CandleEval, ConstantEval, EvalSlot, FadeOffEval,
    FadeOnEval,
};
use crate::math::{lerp8, FULL, ZERO};
use crate::{Clock, PwmSink};

/// Repetition count meaning the effect never self-terminates.
pub const REPEAT_FOREVER: u16 = 0xFFFF;

/// What the controller writes when an effect is stopped explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopMode {
    /// Write zero brightness
    #[default]
    ToZero,
    /// Write the configured minimum brightness
    ToMin,
    /// Leave the last written value untouched
    KeepCurrent,
}

/// Captured playback position returned by [`Led::pause`]
///
/// Holds the elapsed offset from the effect's anchor at the moment of
/// pause, or nothing if the effect had not been anchored yet.
#[derive(Debug, Clone, Copy)]
pub struct Paused {
    elapsed: Option<u32>,
}

/// The active evaluator: inline built-in variant or borrowed user one
enum EvalCell<'a> {
    Inline(EvalSlot),
    User(&'a mut dyn BrightnessEval),
}

impl EvalCell<'_> {
    fn period(&self) -> u16 {
        match self {
            Self::Inline(slot) => slot.period(),
            Self::User(eval) => eval.period(),
        }
    }

    fn eval(&mut self, t: u32) -> u8 {
        match self {
            Self::Inline(slot) => slot.eval(t),
            Self::User(eval) => eval.eval(t),
        }
    }
}

/// Non-blocking effect controller for a single brightness channel
///
/// Poll [`update`](Self::update) from the control loop; it never blocks
/// and returns `true` while the effect is still progressing.
pub struct Led<'a, S: PwmSink> {
    sink: S,
    eval: Option<EvalCell<'a>>,

    stopped: bool,
    in_delay_after: bool,
    low_active: bool,
    min_brightness: u8,
    max_brightness: u8,
    num_repetitions: u16,
    delay_before: u16,
    delay_after: u16,
    /// Absolute time the first period begins; anchored lazily on the first
    /// update after a (re)start.
    time_start: Option<u32>,
    /// Low 16 bits of the last processed timestamp, for same-tick dedup.
    last_tick: Option<u16>,
}

impl<'a, S: PwmSink> Led<'a, S> {
    /// Create a controller for the given hardware sink with no effect set
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            eval: None,
            stopped: false,
            in_delay_after: false,
            low_active: false,
            min_brightness: ZERO,
            max_brightness: FULL,
            num_repetitions: 1,
            delay_before: 0,
            delay_after: 0,
            time_start: None,
            last_tick: None,
        }
    }

    // --- effect configuration -------------------------------------------

    /// Turn the LED on at full brightness
    #[must_use]
    pub fn on(self) -> Self {
        self.level(FULL)
    }

    /// Turn the LED off
    #[must_use]
    pub fn off(self) -> Self {
        self.level(ZERO)
    }

    /// Turn the LED on or off
    #[must_use]
    pub fn set(self, on: bool) -> Self {
        if on { self.on() } else { self.off() }
    }

    /// Hold a constant brightness level
    #[must_use]
    pub fn level(mut self, value: u8) -> Self {
        self.set_effect(EvalSlot::Constant(ConstantEval::new(value)));
        self
    }

    /// Blink with the given on- and off-durations
    #[must_use]
    pub fn blink(mut self, duration_on: u16, duration_off: u16) -> Self {
        self.set_effect(EvalSlot::Blink(BlinkEval::new(duration_on, duration_off)));
        self
    }

    /// Fade from zero to full brightness over the given duration
    #[must_use]
    pub fn fade_on(mut self, duration: u16) -> Self {
        self.set_effect(EvalSlot::FadeOn(FadeOnEval::new(duration)));
        self
    }

    /// Fade from full brightness to zero over the given duration
    #[must_use]
    pub fn fade_off(mut self, duration: u16) -> Self {
        self.set_effect(EvalSlot::FadeOff(FadeOffEval::new(duration)));
        self
    }

    /// Breathe symmetrically over the given period
    #[must_use]
    pub fn breathe(mut self, period: u16) -> Self {
        self.set_effect(EvalSlot::Breathe(BreatheEval::new(period)));
        self
    }

    /// Breathe with explicit fade-in, plateau and fade-out durations,
    /// mapped into the brightness range `[from, to]`
    #[must_use]
    pub fn breathe_range(
        mut self,
        duration_fade_on: u16,
        duration_on: u16,
        duration_fade_off: u16,
        from: u8,
        to: u8,
    ) -> Self {
        self.set_effect(EvalSlot::Breathe(
            BreatheEval::with_segments(duration_fade_on, duration_on, duration_fade_off)
                .with_range(from, to),
        ));
        self
    }

    /// Flicker like a candle
    ///
    /// `speed` selects the flicker bucket width as a power of two, `jitter`
    /// is the dip probability in 1/255 steps.
    #[must_use]
    pub fn candle(mut self, speed: u8, jitter: u8, period: u16) -> Self {
        self.set_effect(EvalSlot::Candle(CandleEval::new(speed, jitter, period)));
        self
    }

    /// Use a caller-owned brightness evaluator
    ///
    /// The borrow must outlive the controller's use of it.
    #[must_use]
    pub fn user_func(mut self, eval: &'a mut dyn BrightnessEval) -> Self {
        self.set_user_effect(eval);
        self
    }

    /// Swap in a built-in evaluator, resetting all timing state
    pub fn set_effect(&mut self, slot: EvalSlot) {
        self.eval = Some(EvalCell::Inline(slot));
        self.reset();
    }

    /// Swap in a user evaluator, resetting all timing state
    pub fn set_user_effect(&mut self, eval: &'a mut dyn BrightnessEval) {
        self.eval = Some(EvalCell::User(eval));
        self.reset();
    }

    // --- modifiers ------------------------------------------------------

    /// Set the number of repetitions of the effect
    #[must_use]
    pub fn repeat(mut self, num_repetitions: u16) -> Self {
        self.num_repetitions = num_repetitions;
        self
    }

    /// Repeat the effect forever
    #[must_use]
    pub fn forever(self) -> Self {
        self.repeat(REPEAT_FOREVER)
    }

    /// Wait the given time before the effect starts
    ///
    /// Relative to the first call of [`update`](Self::update).
    #[must_use]
    pub fn delay_before(mut self, delay: u16) -> Self {
        self.delay_before = delay;
        self
    }

    /// Hold the terminal value for the given time after each repetition
    #[must_use]
    pub fn delay_after(mut self, delay: u16) -> Self {
        self.delay_after = delay;
        self
    }

    /// Set the lower bound of the output brightness range
    #[must_use]
    pub fn min_brightness(mut self, value: u8) -> Self {
        self.min_brightness = value;
        self
    }

    /// Set the upper bound of the output brightness range
    #[must_use]
    pub fn max_brightness(mut self, value: u8) -> Self {
        self.max_brightness = value;
        self
    }

    /// Invert the physical output polarity
    #[must_use]
    pub fn low_active(mut self) -> Self {
        self.low_active = true;
        self
    }

    // --- runtime control ------------------------------------------------

    /// Advance the effect to wall-clock time `now` (milliseconds)
    ///
    /// Returns `true` while the effect is still progressing, including the
    /// delay-before and delay-after windows, and `false` once stopped or
    /// finished. `false` is terminal until the effect is restarted.
    /// Calling `update` again with an unchanged timestamp neither
    /// re-evaluates nor re-writes.
    pub fn update(&mut self, now: u32) -> bool {
        if self.stopped || self.eval.is_none() {
            return false;
        }

        #[allow(clippy::cast_possible_truncation)]
        let tick = now as u16;
        if self.last_tick == Some(tick) {
            return true;
        }
        self.last_tick = Some(tick);

        let time_start = match self.time_start {
            Some(start) => start,
            None => {
                let start = now.wrapping_add(u32::from(self.delay_before));
                self.time_start = Some(start);
                self.in_delay_after = false;
                start
            }
        };

        // wraparound-safe "now < time_start"
        #[allow(clippy::cast_possible_wrap)]
        if (now.wrapping_sub(time_start) as i32) < 0 {
            return true;
        }

        let period = u32::from(self.period());
        let cycle = (period + u32::from(self.delay_after)).max(1);
        let elapsed = now.wrapping_sub(time_start);
        let t = elapsed % cycle;

        if t < period {
            self.in_delay_after = false;
            let value = self.eval_at(t);
            self.write(value);
        } else if !self.in_delay_after {
            // write the terminal value once at the start of the
            // delay-after window, then stay quiet
            self.in_delay_after = true;
            let value = self.eval_at(period.saturating_sub(1));
            self.write(value);
        }

        if self.is_forever() {
            return true;
        }

        let total = cycle.saturating_mul(u32::from(self.num_repetitions));
        if elapsed >= total.saturating_sub(1) {
            // make sure the final value of t = period - 1 is set
            let value = self.eval_at(period.saturating_sub(1));
            self.write(value);
            self.stopped = true;
            #[cfg(feature = "esp32-log")]
            println!("led-effects: effect finished");
            return false;
        }
        true
    }

    /// Advance the effect using the given clock
    pub fn update_with<C: Clock>(&mut self, clock: &C) -> bool {
        self.update(clock.now())
    }

    /// Stop the effect, writing zero brightness
    ///
    /// Further updates are no-ops until a new effect is set or
    /// [`reset`](Self::reset) is called.
    pub fn stop(&mut self) {
        self.stop_with(StopMode::ToZero);
    }

    /// Stop the effect with the given output policy
    pub fn stop_with(&mut self, mode: StopMode) {
        match mode {
            StopMode::ToZero => self.write_raw(ZERO),
            StopMode::ToMin => self.write_raw(self.min_brightness),
            StopMode::KeepCurrent => {}
        }
        self.stopped = true;
        #[cfg(feature = "esp32-log")]
        println!("led-effects: effect stopped");
    }

    /// Restart the configured effect from t = 0 on the next update
    ///
    /// Keeps the evaluator and all modifiers.
    pub fn reset(&mut self) {
        self.time_start = None;
        self.last_tick = None;
        self.stopped = false;
        self.in_delay_after = false;
    }

    /// Freeze playback, capturing the current position
    ///
    /// Does not write to the sink; the last written value is held by the
    /// hardware. Pass the returned state to [`resume`](Self::resume) to
    /// continue from the same position.
    pub fn pause(&mut self, now: u32) -> Paused {
        let elapsed = self.time_start.map(|start| now.wrapping_sub(start));
        self.stopped = true;
        Paused { elapsed }
    }

    /// Continue playback from a captured position
    ///
    /// Re-anchors the effect so that it behaves as if no time had passed
    /// since the matching [`pause`](Self::pause).
    pub fn resume(&mut self, paused: Paused, now: u32) {
        self.time_start = paused.elapsed.map(|elapsed| now.wrapping_sub(elapsed));
        self.last_tick = None;
        self.in_delay_after = false;
        self.stopped = false;
    }

    // --- accessors ------------------------------------------------------

    /// Check if the effect is still running
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Check if the effect repeats forever
    pub fn is_forever(&self) -> bool {
        self.num_repetitions == REPEAT_FOREVER
    }

    /// Check if the output polarity is inverted
    pub fn is_low_active(&self) -> bool {
        self.low_active
    }

    /// Get a reference to the hardware sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the hardware sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // --- internals ------------------------------------------------------

    fn period(&self) -> u16 {
        match &self.eval {
            Some(cell) => cell.period(),
            None => 0,
        }
    }

    fn eval_at(&mut self, t: u32) -> u8 {
        match &mut self.eval {
            Some(cell) => cell.eval(t),
            None => ZERO,
        }
    }

    /// Map evaluator output into the brightness range and write it out
    fn write(&mut self, value: u8) {
        self.write_raw(lerp8(value, self.min_brightness, self.max_brightness));
    }

    /// Write a value to the sink, applying only the polarity
    fn write_raw(&mut self, value: u8) {
        let out = if self.low_active { FULL - value } else { value };
        self.sink.write(out);
    }
}
