#![forbid(unsafe_code)]

//! Page components for Vitrine.
//!
//! Every component is constructed against an explicit surface trait (the
//! host's rendering collaborator) and, where it needs time, a
//! [`Scheduler`](vitrine_backend::Scheduler). Components own their state and
//! push presentation changes to the surface; they never query global state.
//!
//! | component | surface |
//! |---|---|
//! | [`carousel::CarouselController`] | [`carousel::CarouselSurface`] |
//! | [`expander::Expander`] | [`expander::ExpanderSurface`] |
//! | [`accordion::Accordion`] | [`accordion::AccordionSurface`] |
//! | [`contact_form::ContactForm`] | [`contact_form::FormSurface`] |
//! | [`smooth_scroll::SmoothScroll`] | [`smooth_scroll::NavSurface`] |

pub mod accordion;
pub mod carousel;
pub mod contact_form;
pub mod expander;
pub mod smooth_scroll;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;
pub mod timer;

use core::fmt;

use vitrine_core::{ComponentId, Event};

/// What a component did with an event.
///
/// Ordered by strength so outcomes from several components can be merged
/// with [`Outcome::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Outcome {
    /// Not addressed to this component, or nothing to do.
    #[default]
    Ignored,
    /// State changed or a side effect ran.
    Handled,
    /// Handled, and the host must suppress its default action
    /// (link navigation, form post).
    PreventDefault,
}

impl Outcome {
    /// Combine two outcomes, keeping the stronger one.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Whether anything reacted.
    #[inline]
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Whether the host's default action must be suppressed.
    #[inline]
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::PreventDefault)
    }
}

/// A mounted, event-driven page component.
pub trait Component {
    /// Identifier targeted events must carry to reach this component.
    fn id(&self) -> ComponentId;

    /// Short kind name for logs.
    fn name(&self) -> &'static str;

    /// React to one event.
    ///
    /// Targeted events for other components and timers this component does
    /// not own must return [`Outcome::Ignored`].
    fn handle_event(&mut self, event: &Event) -> Outcome;
}

/// Why a component could not be mounted on its surface.
///
/// Hosts treat this as "this page has no such widget" and carry on: a page
/// without a carousel is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountError {
    /// The surface lacks a required element.
    MissingSurface(&'static str),
    /// The surface has no items to drive.
    NoItems(&'static str),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSurface(what) => write!(f, "missing surface element: {what}"),
            Self::NoItems(what) => write!(f, "surface has no {what}"),
        }
    }
}

impl std::error::Error for MountError {}
