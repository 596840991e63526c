#![forbid(unsafe_code)]

//! A page: the set of mounted components plus their shared timeline.
//!
//! The host pushes every DOM-level event through [`Page::dispatch`] and moves
//! time with [`Page::advance`]. Timer firings are turned into
//! [`Event::Timer`] and routed like any other event, so components see a
//! single, ordered event stream.
//!
//! Components whose surface is absent fail to mount; [`Page::try_mount`]
//! logs the failure and leaves the page without that component, which is
//! the "silent no-op" contract for missing markup.

use core::time::Duration;

use vitrine_core::{ComponentId, Event, Viewport};
use vitrine_widgets::{Component, MountError, Outcome};

use crate::scheduler::VirtualScheduler;

/// Mounted components sharing one [`VirtualScheduler`].
pub struct Page<'a> {
    scheduler: VirtualScheduler,
    components: Vec<Box<dyn Component + 'a>>,
    next_id: u32,
}

impl<'a> Page<'a> {
    /// An empty page driven by `scheduler`.
    #[must_use]
    pub fn new(scheduler: VirtualScheduler) -> Self {
        Self {
            scheduler,
            components: Vec::new(),
            next_id: 0,
        }
    }

    /// The shared timeline. Clone it to hand to components.
    #[inline]
    #[must_use]
    pub const fn scheduler(&self) -> &VirtualScheduler {
        &self.scheduler
    }

    /// A fresh component id, unique within this page.
    pub fn allocate_id(&mut self) -> ComponentId {
        self.next_id += 1;
        ComponentId::new(self.next_id)
    }

    /// Add a mounted component. Returns its id.
    pub fn mount(&mut self, component: impl Component + 'a) -> ComponentId {
        let id = component.id();
        tracing::debug!(
            target: "vitrine.page",
            component = %id,
            kind = component.name(),
            "component mounted"
        );
        self.components.push(Box::new(component));
        id
    }

    /// Add the component if it mounted, otherwise log and skip it.
    ///
    /// Returns the id on success.
    pub fn try_mount<C: Component + 'a>(
        &mut self,
        mounted: Result<C, MountError>,
    ) -> Option<ComponentId> {
        match mounted {
            Ok(component) => Some(self.mount(component)),
            Err(err) => {
                tracing::debug!(
                    target: "vitrine.page",
                    error = %err,
                    "component skipped"
                );
                None
            }
        }
    }

    /// Remove a component, dropping it (which cancels its timers).
    ///
    /// Returns `false` if no component has this id.
    pub fn unmount(&mut self, id: ComponentId) -> bool {
        let Some(pos) = self.components.iter().position(|c| c.id() == id) else {
            return false;
        };
        let component = self.components.remove(pos);
        tracing::debug!(
            target: "vitrine.page",
            component = %id,
            kind = component.name(),
            "component unmounted"
        );
        true
    }

    /// Whether a component with this id is mounted.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.components.iter().any(|c| c.id() == id)
    }

    /// Number of mounted components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing is mounted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Deliver `event` to every component and merge their outcomes.
    ///
    /// Targeted events reach only their component; broadcasts reach all.
    pub fn dispatch(&mut self, event: &Event) -> Outcome {
        let outcome = self
            .components
            .iter_mut()
            .filter(|c| event.is_for(c.id()))
            .fold(Outcome::Ignored, |acc, c| acc.merge(c.handle_event(event)));
        tracing::trace!(
            target: "vitrine.page",
            event = ?event,
            outcome = ?outcome,
            "event dispatched"
        );
        outcome
    }

    /// Broadcast a viewport change.
    pub fn resize(&mut self, viewport: Viewport) -> Outcome {
        self.dispatch(&Event::Resize(viewport))
    }

    /// Move time forward by `dt`, routing each due timer as
    /// [`Event::Timer`]. Returns the number of firings.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let scheduler = self.scheduler.clone();
        let fired = scheduler.advance(dt, |id| {
            let outcome = self.dispatch(&Event::Timer(id));
            if !outcome.is_handled() {
                tracing::debug!(
                    target: "vitrine.page",
                    timer = %id,
                    "timer fired with no owner"
                );
            }
        });
        if fired > 0 {
            tracing::debug!(
                target: "vitrine.page",
                fired,
                now_ms = scheduler.now().as_millis() as u64,
                "timeline advanced"
            );
        }
        fired
    }
}

impl Default for Page<'_> {
    fn default() -> Self {
        Self::new(VirtualScheduler::new())
    }
}

impl core::fmt::Debug for Page<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kinds: Vec<(ComponentId, &'static str)> =
            self.components.iter().map(|c| (c.id(), c.name())).collect();
        f.debug_struct("Page")
            .field("scheduler", &self.scheduler)
            .field("components", &kinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vitrine_core::Part;
    use vitrine_widgets::accordion::Accordion;
    use vitrine_widgets::carousel::{CarouselConfig, CarouselController};
    use vitrine_widgets::testing::{RecordingAccordion, RecordingCarousel, SharedSurface};

    #[test]
    fn ids_are_unique() {
        let mut page = Page::default();
        let a = page.allocate_id();
        let b = page.allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn failed_mount_is_skipped() {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = CarouselController::mount(
            id,
            RecordingCarousel::new(0, 300.0),
            page.scheduler().clone(),
            CarouselConfig::default(),
        );
        assert_eq!(page.try_mount(mounted), None);
        assert!(page.is_empty());
        assert_eq!(page.dispatch(&Event::click(id, Part::Next)), Outcome::Ignored);
    }

    #[test]
    fn targeted_events_reach_only_their_component() {
        let mut page = Page::default();
        let first = page.allocate_id();
        let second = page.allocate_id();
        let a = SharedSurface::new(RecordingAccordion::new(2));
        let b = SharedSurface::new(RecordingAccordion::new(2));
        page.try_mount(Accordion::mount(first, a.clone()));
        page.try_mount(Accordion::mount(second, b.clone()));
        assert_eq!(page.len(), 2);

        assert_eq!(
            page.dispatch(&Event::click(second, Part::Item(1))),
            Outcome::Handled
        );
        assert_eq!(a.get().items, vec![false, false]);
        assert_eq!(b.get().items, vec![false, true]);
    }

    #[test]
    fn unmount_cancels_timers() {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = CarouselController::mount(
            id,
            RecordingCarousel::new(4, 300.0),
            page.scheduler().clone(),
            CarouselConfig::default(),
        );
        page.try_mount(mounted);
        assert_eq!(page.scheduler().pending(), 1);
        assert!(page.unmount(id));
        assert!(!page.contains(id));
        assert_eq!(page.scheduler().pending(), 0);
        assert!(!page.unmount(id));
    }

    #[test]
    fn advance_routes_timers() {
        let mut page = Page::default();
        let id = page.allocate_id();
        let surface = SharedSurface::new(RecordingCarousel::new(6, 300.0));
        page.try_mount(CarouselController::mount(
            id,
            surface.clone(),
            page.scheduler().clone(),
            CarouselConfig::default(),
        ));
        assert_eq!(page.advance(Duration::from_millis(10_000)), 2);
        assert_eq!(surface.get().active_dots(), vec![2]);
    }
}
