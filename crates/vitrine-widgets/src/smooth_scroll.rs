#![forbid(unsafe_code)]

//! Same-page navigation with smooth scrolling.
//!
//! Clicks on navigation links whose href is a fragment (`#about`) are taken
//! over: the host's default jump is suppressed and the element with the
//! matching id is scrolled into view smoothly. Links to other pages are left
//! alone.

use core::fmt;

use vitrine_core::{ComponentId, Event, Part};

use crate::{Component, MountError, Outcome};

/// How the scroll animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump immediately.
    Instant,
}

/// Where the target lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBlock {
    /// Target's top edge at the top of the viewport.
    #[default]
    Start,
    /// Target centered.
    Center,
    /// Target's bottom edge at the bottom of the viewport.
    End,
    /// Minimal scroll that brings the target into view.
    Nearest,
}

/// Options passed to [`NavSurface::scroll_into_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScrollOptions {
    /// Animation.
    pub behavior: ScrollBehavior,
    /// Vertical alignment.
    pub block: ScrollBlock,
}

/// Host-side elements [`SmoothScroll`] reads and drives.
pub trait NavSurface {
    /// Number of navigation links.
    fn link_count(&self) -> usize;

    /// The raw href of `link`.
    fn link_href(&self, link: usize) -> Option<String>;

    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Scroll the element with this id into view.
    fn scroll_into_view(&mut self, id: &str, options: ScrollOptions);
}

/// The fragment of a same-page href, without the leading `#`.
#[must_use]
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Intercepts same-page navigation links.
pub struct SmoothScroll<S: NavSurface> {
    id: ComponentId,
    surface: S,
    options: ScrollOptions,
}

impl<S: NavSurface> SmoothScroll<S> {
    /// Attach to `surface`.
    ///
    /// # Errors
    ///
    /// [`MountError::NoItems`] when the surface has no links.
    pub fn mount(id: ComponentId, surface: S) -> Result<Self, MountError> {
        if surface.link_count() == 0 {
            return Err(MountError::NoItems("navigation links"));
        }
        Ok(Self {
            id,
            surface,
            options: ScrollOptions::default(),
        })
    }

    /// Override the scroll options.
    #[must_use]
    pub fn with_options(mut self, options: ScrollOptions) -> Self {
        self.options = options;
        self
    }

    /// Handle a click on `link`.
    ///
    /// Fragment links always suppress default navigation, even when no
    /// element matches. Other links are ignored.
    pub fn follow(&mut self, link: usize) -> Outcome {
        let Some(href) = self.surface.link_href(link) else {
            return Outcome::Ignored;
        };
        let Some(fragment) = fragment_of(&href) else {
            return Outcome::Ignored;
        };
        if self.surface.has_element(fragment) {
            self.surface.scroll_into_view(fragment, self.options);
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "nav.scroll", component = self.id.get(), element = fragment);
        }
        Outcome::PreventDefault
    }

    /// The surface this component drives.
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: NavSurface> Component for SmoothScroll<S> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &'static str {
        "smooth_scroll"
    }

    fn handle_event(&mut self, event: &Event) -> Outcome {
        match *event {
            Event::Click {
                target,
                part: Part::Item(link),
            } if target == self.id => self.follow(link),
            _ => Outcome::Ignored,
        }
    }
}

impl<S: NavSurface> fmt::Debug for SmoothScroll<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmoothScroll")
            .field("id", &self.id)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
