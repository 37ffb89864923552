//! Multi-LED sequence coordinator
//!
//! Composes several effect controllers so they run in lockstep or one
//! after another, with group-level repetition mirroring the per-LED
//! semantics. The controllers stay owned by the caller; the sequence only
//! borrows them.

use crate::led::{Led, StopMode, REPEAT_FOREVER};
use crate::PwmSink;

/// How the members of a sequence are updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// All members update on every tick
    Parallel,
    /// One member completes before the next starts
    Sequential,
}

/// A group of effect controllers updated together
pub struct Sequence<'s, 'a, S: PwmSink> {
    leds: &'s mut [Led<'a, S>],
    mode: Mode,
    cursor: usize,
    iteration: u16,
    num_repetitions: u16,
    stopped: bool,
}

impl<'s, 'a, S: PwmSink> Sequence<'s, 'a, S> {
    /// Create a sequence over the given controllers
    pub fn new(mode: Mode, leds: &'s mut [Led<'a, S>]) -> Self {
        Self {
            leds,
            mode,
            cursor: 0,
            iteration: 0,
            num_repetitions: 1,
            stopped: false,
        }
    }

    /// Set the number of passes over the whole group
    #[must_use]
    pub fn repeat(mut self, num_repetitions: u16) -> Self {
        self.num_repetitions = num_repetitions;
        self
    }

    /// Repeat the group forever
    #[must_use]
    pub fn forever(self) -> Self {
        self.repeat(REPEAT_FOREVER)
    }

    /// Advance the group to wall-clock time `now`
    ///
    /// Returns `true` while any pass is still progressing and `false` once
    /// all repetitions are exhausted or the group was stopped.
    pub fn update(&mut self, now: u32) -> bool {
        if self.stopped {
            return false;
        }

        let active = match self.mode {
            Mode::Parallel => self.update_parallel(now),
            Mode::Sequential => self.update_sequential(now),
        };
        if active {
            return true;
        }

        // pass complete, apply the group repeat policy
        self.iteration = self.iteration.saturating_add(1);
        if !self.is_forever() && self.iteration >= self.num_repetitions {
            self.stopped = true;
            return false;
        }
        self.restart_members();
        true
    }

    /// Stop every member, writing zero brightness
    pub fn stop(&mut self) {
        self.stop_with(StopMode::ToZero);
    }

    /// Stop every member with the given output policy
    pub fn stop_with(&mut self, mode: StopMode) {
        for led in self.leds.iter_mut() {
            led.stop_with(mode);
        }
        self.stopped = true;
    }

    /// Restart the group from the first pass
    pub fn reset(&mut self) {
        self.restart_members();
        self.iteration = 0;
        self.stopped = false;
    }

    /// Check if the group is still running
    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Check if the group repeats forever
    pub fn is_forever(&self) -> bool {
        self.num_repetitions == REPEAT_FOREVER
    }

    /// Update all members; active while any member is active
    fn update_parallel(&mut self, now: u32) -> bool {
        let mut active = false;
        for led in self.leds.iter_mut() {
            active |= led.update(now);
        }
        active
    }

    /// Update only the member at the cursor, advancing when it finishes
    fn update_sequential(&mut self, now: u32) -> bool {
        if self.cursor >= self.leds.len() {
            return false;
        }
        if !self.leds[self.cursor].update(now) {
            self.cursor += 1;
        }
        true
    }

    fn restart_members(&mut self) {
        for led in self.leds.iter_mut() {
            led.reset();
        }
        self.cursor = 0;
    }
}
