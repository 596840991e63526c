#![forbid(unsafe_code)]

//! Deterministic, host-driven timer timeline.
//!
//! [`VirtualScheduler`] never reads a wall clock. Time moves only when the
//! host calls [`VirtualScheduler::advance`], which reports each due timer in
//! deadline order. Handles are cheap clones of one shared timeline so a page,
//! its components, and the host all see the same timers.
//!
//! # Ordering
//!
//! - Due timers fire one at a time, earliest deadline first; equal deadlines
//!   fire in creation order.
//! - The timeline is not borrowed while the callback runs, so a firing may
//!   cancel or arm timers and the next pick sees the change.
//! - A repeating timer re-arms at `deadline + period`, so its cadence does not
//!   drift with host frame timing.

use core::time::Duration;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use vitrine_backend::{BackendClock, Scheduler};
use vitrine_core::TimerId;

/// Shortest period a repeating timer may have.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    deadline: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
struct Timeline {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Entry>,
    fired: u64,
}

impl Timeline {
    fn arm(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.timers.insert(
            id,
            Entry {
                deadline: self.now.saturating_add(delay),
                period,
            },
        );
        id
    }

    /// Earliest due timer at or before `until`. Ids grow with creation, so
    /// `(deadline, id)` orders ties by creation.
    fn next_due(&self, until: Duration) -> Option<(TimerId, Entry)> {
        self.timers
            .iter()
            .filter(|(_, entry)| entry.deadline <= until)
            .min_by_key(|(id, entry)| (entry.deadline, **id))
            .map(|(id, entry)| (*id, *entry))
    }

    fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (id, entry) = self.next_due(until)?;
        self.now = self.now.max(entry.deadline);
        match entry.period {
            Some(period) => {
                if let Some(armed) = self.timers.get_mut(&id) {
                    armed.deadline = entry.deadline.saturating_add(period);
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }
        self.fired += 1;
        Some(id)
    }
}

/// Shared deterministic timeline implementing [`Scheduler`] and
/// [`BackendClock`].
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl VirtualScheduler {
    /// A timeline at time zero with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timeline.borrow().timers.len()
    }

    /// Whether `id` is armed.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timeline.borrow().timers.contains_key(&id)
    }

    /// Deadline of the next timer to fire, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline
            .borrow()
            .timers
            .values()
            .map(|entry| entry.deadline)
            .min()
    }

    /// Total firings reported so far.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.timeline.borrow().fired
    }

    /// Move time forward by `dt`, calling `on_fire` for each timer that
    /// comes due. Returns the number of firings.
    pub fn advance(&self, dt: Duration, mut on_fire: impl FnMut(TimerId)) -> usize {
        let target = self.now().saturating_add(dt);
        let mut count = 0;
        loop {
            // Bind first so the borrow ends before the callback runs.
            let due = self.timeline.borrow_mut().pop_due(target);
            let Some(id) = due else { break };
            tracing::trace!(message = "scheduler.fire", timer = id.get());
            on_fire(id);
            count += 1;
        }
        self.timeline.borrow_mut().now = target;
        count
    }

    /// Advance exactly to the next deadline and fire what is due there.
    ///
    /// Returns the number of firings, or `0` when nothing is armed.
    pub fn advance_to_next(&self, on_fire: impl FnMut(TimerId)) -> usize {
        let Some(deadline) = self.next_deadline() else {
            return 0;
        };
        let dt = deadline.saturating_sub(self.now());
        self.advance(dt, on_fire)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = self.timeline.borrow_mut().arm(delay, None);
        tracing::trace!(
            message = "scheduler.arm",
            timer = id.get(),
            delay_ms = delay.as_millis() as u64,
            repeating = false
        );
        id
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        let id = self.timeline.borrow_mut().arm(period, Some(period));
        tracing::trace!(
            message = "scheduler.arm",
            timer = id.get(),
            delay_ms = period.as_millis() as u64,
            repeating = true
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.timeline.borrow_mut().timers.remove(&id).is_some();
        if removed {
            tracing::trace!(message = "scheduler.cancel", timer = id.get());
        }
        removed
    }
}

impl BackendClock for VirtualScheduler {
    fn now_mono(&self) -> Duration {
        self.now()
    }
}
