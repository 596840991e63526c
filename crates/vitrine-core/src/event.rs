#![forbid(unsafe_code)]

//! Canonical page events.
//!
//! The host translates its native input (DOM listeners, test scripts) into
//! [`Event`] values. Targeted events name the component they were raised on;
//! broadcast events ([`Event::Resize`], [`Event::Timer`]) are offered to every
//! mounted component, and each component decides whether it cares.

use core::fmt;

use crate::geometry::Viewport;

/// Identifier of a mounted component.
///
/// Assigned by the host when a component is constructed. Two components on
/// the same page must not share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Wrap a raw id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Handle to a scheduled timer.
///
/// Ids are issued by a scheduler and never reused within its lifetime, so a
/// stale id can always be told apart from the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a raw id.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// The part of a component that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// A "previous" trigger.
    Previous,
    /// A "next" trigger.
    Next,
    /// A position marker (carousel dot), by position.
    Dot(usize),
    /// An indexed item: accordion header, expander trigger, navigation link.
    Item(usize),
}

/// Canonical page event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Primary click on part of a component.
    Click {
        /// Component the click landed on.
        target: ComponentId,
        /// Which part of it.
        part: Part,
    },
    /// Pointer entered the component's region.
    PointerEnter {
        /// Component whose region was entered.
        target: ComponentId,
    },
    /// Pointer left the component's region.
    PointerLeave {
        /// Component whose region was left.
        target: ComponentId,
    },
    /// A form was submitted.
    Submit {
        /// The form component.
        target: ComponentId,
    },
    /// The viewport changed size. Broadcast.
    Resize(Viewport),
    /// A scheduled timer fired. Broadcast; only its owner reacts.
    Timer(TimerId),
}

impl Event {
    /// Shorthand for [`Event::Click`].
    #[inline]
    #[must_use]
    pub const fn click(target: ComponentId, part: Part) -> Self {
        Self::Click { target, part }
    }

    /// The component a targeted event was raised on.
    ///
    /// Returns `None` for broadcast events.
    #[must_use]
    pub const fn target(&self) -> Option<ComponentId> {
        match self {
            Self::Click { target, .. }
            | Self::PointerEnter { target }
            | Self::PointerLeave { target }
            | Self::Submit { target } => Some(*target),
            Self::Resize(_) | Self::Timer(_) => None,
        }
    }

    /// Whether this event is offered to every component.
    #[inline]
    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        self.target().is_none()
    }

    /// Whether a component with `id` should see this event.
    #[inline]
    #[must_use]
    pub fn is_for(&self, id: ComponentId) -> bool {
        self.target().is_none_or(|target| target == id)
    }
}
