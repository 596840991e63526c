#![forbid(unsafe_code)]

//! Bridges real elapsed time onto a page's virtual timeline.
//!
//! A browser or native host calls [`WallClockDriver::tick`] from its frame
//! or idle callback. The driver reads a [`BackendClock`] (the system clock by
//! default), measures the time since the previous tick, and advances the page
//! by exactly that much, so timers keep their deterministic ordering while
//! tracking real time.

use core::time::Duration;

use vitrine_backend::{BackendClock, SystemClock};

use crate::page::Page;

/// Advances a [`Page`] by the time its clock moved between ticks.
#[derive(Debug, Clone, Copy)]
pub struct WallClockDriver<C: BackendClock = SystemClock> {
    clock: C,
    last: Duration,
    max_step: Option<Duration>,
}

impl WallClockDriver {
    /// A driver on the system clock whose first tick measures from now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C: BackendClock> WallClockDriver<C> {
    /// A driver reading `clock`; the first tick measures from its current
    /// reading.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        let last = clock.now_mono();
        Self {
            clock,
            last,
            max_step: None,
        }
    }

    /// Cap a single tick's step, e.g. after the host was suspended.
    ///
    /// Time beyond the cap is dropped rather than replayed as a burst of
    /// timer firings.
    #[must_use]
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = Some(max_step);
        self
    }

    /// The clock ticks are measured on.
    #[inline]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Advance `page` by the time since the previous tick.
    ///
    /// Returns the number of timer firings.
    pub fn tick(&mut self, page: &mut Page<'_>) -> usize {
        let now = self.clock.now_mono();
        let elapsed = now.saturating_sub(self.last);
        self.last = self.last.max(now);
        self.step(page, elapsed)
    }

    fn step(&self, page: &mut Page<'_>, elapsed: Duration) -> usize {
        let dt = match self.max_step {
            Some(max) if elapsed > max => {
                tracing::debug!(
                    target: "vitrine.driver",
                    elapsed_ms = elapsed.as_millis() as u64,
                    max_ms = max.as_millis() as u64,
                    "tick clamped"
                );
                max
            }
            _ => elapsed,
        };
        page.advance(dt)
    }
}

impl Default for WallClockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BackendClock> BackendClock for WallClockDriver<C> {
    fn now_mono(&self) -> Duration {
        self.clock.now_mono()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use vitrine_backend::Scheduler;

    #[test]
    fn step_is_clamped() {
        let driver = WallClockDriver::new().with_max_step(Duration::from_millis(100));
        let mut page = Page::default();
        let mut sched = page.scheduler().clone();
        sched.schedule_repeating(Duration::from_millis(10));
        assert_eq!(driver.step(&mut page, Duration::from_secs(60)), 10);
        assert_eq!(page.scheduler().now(), Duration::from_millis(100));
    }

    #[test]
    fn unclamped_step_uses_elapsed() {
        let driver = WallClockDriver::new();
        let mut page = Page::default();
        assert_eq!(driver.step(&mut page, Duration::from_millis(250)), 0);
        assert_eq!(page.scheduler().now(), Duration::from_millis(250));
    }

    #[derive(Debug, Default)]
    struct StepClock(Cell<Duration>);

    impl StepClock {
        fn set(&self, ms: u64) {
            self.0.set(Duration::from_millis(ms));
        }
    }

    impl BackendClock for &StepClock {
        fn now_mono(&self) -> Duration {
            self.0.get()
        }
    }

    #[test]
    fn tick_advances_by_clock_delta() {
        let clock = StepClock::default();
        clock.set(1_000);
        let mut driver = WallClockDriver::with_clock(&clock);
        let mut page = Page::default();
        let mut sched = page.scheduler().clone();
        sched.schedule_repeating(Duration::from_millis(100));

        clock.set(1_250);
        assert_eq!(driver.tick(&mut page), 2);
        assert_eq!(page.scheduler().now(), Duration::from_millis(250));

        // A clock that reads earlier than the last tick advances nothing.
        clock.set(1_100);
        assert_eq!(driver.tick(&mut page), 0);
        clock.set(1_300);
        assert_eq!(driver.tick(&mut page), 1);
        assert_eq!(page.scheduler().now(), Duration::from_millis(300));
        assert_eq!(driver.now_mono(), Duration::from_millis(1_300));
    }

    #[test]
    fn tick_never_moves_backwards() {
        let mut driver = WallClockDriver::new();
        let mut page = Page::default();
        driver.tick(&mut page);
        let first = page.scheduler().now();
        driver.tick(&mut page);
        assert!(page.scheduler().now() >= first);
        assert!(driver.now_mono() >= Duration::ZERO);
    }
}
