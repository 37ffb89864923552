//! Update scheduling and timing utilities.
//!
//! Provides portable update pacing without async/await or
//! platform-specific timers. The caller is responsible for
//! sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::Clock;

/// Default update rate (100 Hz).
pub const DEFAULT_TICK_HZ: u32 = 100;

/// Default tick interval based on the update rate.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000 / DEFAULT_TICK_HZ as u64);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Current time in the controllers' wraparound millisecond domain.
    pub now_ms: u32,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler that manages update timing without async.
///
/// Tracks tick deadlines with drift correction: if the caller falls behind
/// by more than two intervals, the backlog is skipped instead of bursting
/// to catch up.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = UpdateScheduler::new();
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     led.update(result.now_ms);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct UpdateScheduler {
    next_tick: Instant,
    interval: Duration,
}

impl UpdateScheduler {
    /// Create a scheduler with the default 100 Hz interval
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Create a scheduler with a custom tick interval
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            next_tick: Instant::from_millis(0),
            interval,
        }
    }

    /// Advance the schedule and return timing information
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Drift correction: reset instead of bursting after a long stall
        let max_drift_ms = self.interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.next_tick += self.interval;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            now_ms: now.as_millis() as u32,
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }
}

impl Default for UpdateScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Millisecond clock backed by `embassy_time::Instant`
///
/// Truncates the 64-bit instant into the controllers' 32-bit wraparound
/// domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
