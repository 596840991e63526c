#![forbid(unsafe_code)]

//! Single-slot timer ownership.
//!
//! A [`TimerSlot`] holds at most one armed timer. Arming always cancels the
//! previous timer first, so a component can never have two overlapping
//! timers of the same kind.

use core::time::Duration;

use vitrine_backend::Scheduler;
use vitrine_core::TimerId;

/// At most one armed timer, plus the period it was armed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSlot {
    active: Option<(TimerId, Duration)>,
}

impl TimerSlot {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Cancel any armed timer, then arm a repeating one.
    pub fn start_repeating<S: Scheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        period: Duration,
    ) -> TimerId {
        self.stop(scheduler);
        let id = scheduler.schedule_repeating(period);
        self.active = Some((id, period));
        id
    }

    /// Cancel any armed timer, then arm a one-shot.
    pub fn start_once<S: Scheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        delay: Duration,
    ) -> TimerId {
        self.stop(scheduler);
        let id = scheduler.schedule_once(delay);
        self.active = Some((id, delay));
        id
    }

    /// Cancel the armed timer, if any. Idempotent.
    ///
    /// Returns `true` if a timer was armed.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match self.active.take() {
            Some((id, _)) => {
                scheduler.cancel(id);
                true
            }
            None => false,
        }
    }

    /// Forget a one-shot that has already fired, without cancelling it.
    ///
    /// Returns `true` if `id` was the armed timer.
    pub fn clear_fired(&mut self, id: TimerId) -> bool {
        if self.owns(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Whether `id` is the armed timer.
    #[inline]
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.active.is_some_and(|(active, _)| active == id)
    }

    /// Whether a timer is armed.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The armed timer id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<TimerId> {
        self.active.map(|(id, _)| id)
    }

    /// The period (or delay) the armed timer was started with.
    #[inline]
    #[must_use]
    pub fn period(&self) -> Option<Duration> {
        self.active.map(|(_, period)| period)
    }
}
