#![forbid(unsafe_code)]
#![doc = "Backend traits for Vitrine: platform abstraction for timers, time, and notices."]
#![doc = ""]
#![doc = "This crate defines the boundary between page components and whatever hosts"]
#![doc = "them (a browser binding, a test script, the deterministic runtime scheduler)."]
#![doc = "Components never read a wall clock or arm a platform timer directly; all"]
#![doc = "time flows through [`Scheduler`] and [`BackendClock`]."]

use core::time::Duration;

use vitrine_core::TimerId;

/// Monotonic clock abstraction.
///
/// Native hosts use `std::time::Instant`; WASM hosts use `performance.now()`
/// (both via [`SystemClock`]). Deterministic hosts advance time explicitly.
pub trait BackendClock {
    /// Returns elapsed time since an unspecified epoch, monotonically increasing.
    fn now_mono(&self) -> Duration;
}

/// Timer scheduling abstraction.
///
/// Firings are not delivered through this trait. The host observes that a
/// timer is due and feeds [`vitrine_core::Event::Timer`] back into the page,
/// which keeps every callback on the single cooperative event loop.
pub trait Scheduler {
    /// Arm a timer that fires once after `delay`.
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Arm a timer that fires every `period` until cancelled.
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Cancel a timer. Returns `true` if it was still armed.
    ///
    /// Cancelling an unknown or already-fired one-shot timer is a no-op.
    fn cancel(&mut self, id: TimerId) -> bool;
}

impl<T: Scheduler + ?Sized> Scheduler for &mut T {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        (**self).schedule_once(delay)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        (**self).cancel(id)
    }
}

impl<T: Scheduler + ?Sized> Scheduler for Box<T> {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        (**self).schedule_once(delay)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        (**self).cancel(id)
    }
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    /// Something the user must fix.
    Error,
    /// Confirmation that an action completed.
    Success,
}

/// A blocking, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Message text shown to the user.
    pub message: String,
}

impl Notice {
    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Presents blocking notices (an `alert()` on the web).
pub trait Notifier {
    /// Show `notice` to the user.
    fn notify(&mut self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, notice: &Notice) {
        (**self).notify(notice);
    }
}

/// Wall clock backed by [`web_time::Instant`].
///
/// Works on native targets and on `wasm32-unknown-unknown`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: web_time::Instant,
}

impl SystemClock {
    /// Create a clock whose epoch is now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: web_time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendClock for SystemClock {
    fn now_mono(&self) -> Duration {
        self.origin.elapsed()
    }
}
