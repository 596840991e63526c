#![forbid(unsafe_code)]

//! Testimonials carousel.
//!
//! [`CarouselController`] owns one piece of state, the index of the left-most
//! visible card. Everything the user sees is derived from that index and the
//! visible-card-count, which itself is derived from the last known viewport
//! width (measured at mount, then taken from each resize event):
//!
//! - container translation: `index * (card_width + card_gap)`
//! - dot `i` is active iff `i == index`
//! - "previous" is dimmed iff `index == 0`
//! - "next" is dimmed iff `index >= cards - visible`
//!
//! A repeating timer advances the index on a fixed cadence, wrapping to the
//! first window after the last one. Hovering the carousel pauses it.
//!
//! # Example
//!
//! ```ignore
//! let mut carousel = CarouselController::mount(id, surface, scheduler, CarouselConfig::default())?;
//! carousel.handle_event(&Event::click(id, Part::Next));
//! assert_eq!(carousel.index(), 1);
//! ```

use core::fmt;
use core::time::Duration;

use vitrine_backend::Scheduler;
use vitrine_core::{ComponentId, Event, Part, TimerId, Viewport};

use crate::timer::TimerSlot;
use crate::{Component, MountError, Outcome};

/// Viewport width (inclusive) at or below which one card is shown.
pub const DEFAULT_BREAKPOINT: f64 = 1024.0;
/// Spacing between cards, in logical pixels.
pub const DEFAULT_CARD_GAP: f64 = 40.0;
/// Auto-advance cadence.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;
/// Cards shown side by side above the breakpoint.
pub const DEFAULT_DESKTOP_CARDS: usize = 2;

/// Carousel behavior knobs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Viewport width at or below which a single card is visible.
    pub visible_card_breakpoint: f64,
    /// Cards visible above the breakpoint.
    pub desktop_visible_cards: usize,
    /// Fixed spacing added to the measured card width per step.
    pub card_gap: f64,
    /// Start the auto-advance timer on mount and after hover ends.
    pub auto_advance: bool,
    /// Auto-advance period in milliseconds.
    pub auto_advance_interval_ms: u64,
    /// Whether "previous" at the first card jumps to the last window.
    pub wrap_on_manual_retreat: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_card_breakpoint: DEFAULT_BREAKPOINT,
            desktop_visible_cards: DEFAULT_DESKTOP_CARDS,
            card_gap: DEFAULT_CARD_GAP,
            auto_advance: true,
            auto_advance_interval_ms: DEFAULT_INTERVAL_MS,
            wrap_on_manual_retreat: false,
        }
    }
}

impl CarouselConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-card breakpoint.
    #[must_use]
    pub fn visible_card_breakpoint(mut self, width: f64) -> Self {
        self.visible_card_breakpoint = width;
        self
    }

    /// Set the number of cards shown above the breakpoint.
    #[must_use]
    pub fn desktop_visible_cards(mut self, cards: usize) -> Self {
        self.desktop_visible_cards = cards;
        self
    }

    /// Set the spacing between cards.
    #[must_use]
    pub fn card_gap(mut self, gap: f64) -> Self {
        self.card_gap = gap;
        self
    }

    /// Enable or disable the auto-advance timer.
    #[must_use]
    pub fn auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }

    /// Set the auto-advance period in milliseconds.
    #[must_use]
    pub fn auto_advance_interval_ms(mut self, ms: u64) -> Self {
        self.auto_advance_interval_ms = ms;
        self
    }

    /// Choose whether manual "previous" wraps at the first card.
    #[must_use]
    pub fn wrap_on_manual_retreat(mut self, wrap: bool) -> Self {
        self.wrap_on_manual_retreat = wrap;
        self
    }

    /// Auto-advance period as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }
}

/// One of the two navigation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The "previous" trigger.
    Previous,
    /// The "next" trigger.
    Next,
}

/// Visual state of a navigation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Affordance {
    /// Fully visible and clickable.
    #[default]
    Enabled,
    /// Shown at reduced emphasis to signal the boundary.
    Dimmed,
}

impl Affordance {
    const fn dimmed_if(dimmed: bool) -> Self {
        if dimmed { Self::Dimmed } else { Self::Enabled }
    }
}

/// The host-side elements a carousel drives.
pub trait CarouselSurface {
    /// Whether the translated container element exists.
    fn has_container(&self) -> bool {
        true
    }

    /// Number of cards. Read once at mount.
    fn card_count(&self) -> usize;

    /// Number of dot markers.
    fn dot_count(&self) -> usize;

    /// Measured width of the reference (first) card.
    fn reference_card_width(&self) -> f64;

    /// Viewport size at mount. Later changes arrive as [`Event::Resize`].
    fn viewport(&self) -> Viewport;

    /// Shift the container left by `offset` logical pixels.
    fn set_translation(&mut self, offset: f64);

    /// Mark a dot active or inactive.
    fn set_dot_active(&mut self, dot: usize, active: bool);

    /// Update a navigation trigger's visual state.
    fn set_affordance(&mut self, control: Control, affordance: Affordance);
}

impl<T: CarouselSurface + ?Sized> CarouselSurface for &mut T {
    fn has_container(&self) -> bool {
        (**self).has_container()
    }

    fn card_count(&self) -> usize {
        (**self).card_count()
    }

    fn dot_count(&self) -> usize {
        (**self).dot_count()
    }

    fn reference_card_width(&self) -> f64 {
        (**self).reference_card_width()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn set_translation(&mut self, offset: f64) {
        (**self).set_translation(offset);
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        (**self).set_dot_active(dot, active);
    }

    fn set_affordance(&mut self, control: Control, affordance: Affordance) {
        (**self).set_affordance(control, affordance);
    }
}

/// Carousel state machine bound to a surface and a scheduler.
pub struct CarouselController<S: CarouselSurface, T: Scheduler> {
    id: ComponentId,
    surface: S,
    scheduler: T,
    config: CarouselConfig,
    card_count: usize,
    viewport: Viewport,
    index: usize,
    hovered: bool,
    timer: TimerSlot,
}

impl<S: CarouselSurface, T: Scheduler> CarouselController<S, T> {
    /// Attach to `surface`, render the first window, and start auto-advance
    /// if configured.
    ///
    /// # Errors
    ///
    /// [`MountError::MissingSurface`] without a container and
    /// [`MountError::NoItems`] without cards. Hosts treat both as "no
    /// carousel on this page".
    pub fn mount(
        id: ComponentId,
        surface: S,
        scheduler: T,
        config: CarouselConfig,
    ) -> Result<Self, MountError> {
        if !surface.has_container() {
            return Err(MountError::MissingSurface("carousel container"));
        }
        let card_count = surface.card_count();
        if card_count == 0 {
            return Err(MountError::NoItems("carousel cards"));
        }

        let viewport = surface.viewport();
        let mut carousel = Self {
            id,
            surface,
            scheduler,
            config,
            card_count,
            viewport,
            index: 0,
            hovered: false,
            timer: TimerSlot::new(),
        };
        carousel.render();
        if carousel.config.auto_advance {
            carousel.start_auto_advance(carousel.config.interval());
        }
        Ok(carousel)
    }

    /// Index of the left-most visible card.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of cards, fixed at mount.
    #[inline]
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.card_count
    }

    /// Viewport the visible-card-count is derived from.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The surface this carousel drives.
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. for a host to update measurements.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether the auto-advance timer is armed.
    #[inline]
    #[must_use]
    pub const fn is_auto_advancing(&self) -> bool {
        self.timer.is_active()
    }

    /// Whether the pointer is over the carousel.
    #[inline]
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Cards shown side by side at the current viewport width.
    #[must_use]
    pub fn visible_card_count(&self) -> usize {
        if self.viewport.is_narrow(self.config.visible_card_breakpoint) {
            1
        } else {
            self.config.desktop_visible_cards.max(1)
        }
    }

    /// Largest valid index at the current viewport width.
    #[inline]
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.card_count.saturating_sub(self.visible_card_count())
    }

    /// Move one card forward, wrapping to the first window after the last.
    ///
    /// Returns `true` if the index changed.
    pub fn advance(&mut self) -> bool {
        let from = self.index;
        self.index = if self.index < self.max_index() {
            self.index + 1
        } else {
            0
        };
        self.log_transition("advance", from);
        self.render();
        from != self.index
    }

    /// Move one card back.
    ///
    /// At the first card this either stays put or jumps to the last window,
    /// per [`CarouselConfig::wrap_on_manual_retreat`]. Returns `true` if the
    /// index changed.
    pub fn retreat(&mut self) -> bool {
        let from = self.index;
        if self.index > 0 {
            self.index -= 1;
        } else if self.config.wrap_on_manual_retreat {
            self.index = self.max_index();
        }
        self.log_transition("retreat", from);
        self.render();
        from != self.index
    }

    /// Jump to `target`, clamped to the last valid window.
    ///
    /// Returns `true` if the index changed.
    pub fn go_to(&mut self, target: usize) -> bool {
        let from = self.index;
        self.index = target.min(self.max_index());
        self.log_transition("go_to", from);
        self.render();
        from != self.index
    }

    /// Push the derived presentation state to the surface.
    pub fn render(&mut self) {
        let max = self.max_index();
        let step = self.surface.reference_card_width() + self.config.card_gap;
        let offset = self.index as f64 * step;
        self.surface.set_translation(offset);

        for dot in 0..self.surface.dot_count() {
            self.surface.set_dot_active(dot, dot == self.index);
        }

        self.surface
            .set_affordance(Control::Previous, Affordance::dimmed_if(self.index == 0));
        self.surface
            .set_affordance(Control::Next, Affordance::dimmed_if(self.index >= max));
    }

    /// Arm the repeating auto-advance timer, replacing any armed one.
    pub fn start_auto_advance(&mut self, interval: Duration) {
        let _id = self.timer.start_repeating(&mut self.scheduler, interval);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.timer.start",
            component = self.id.get(),
            timer = _id.get(),
            interval_ms = interval.as_millis() as u64
        );
    }

    /// Cancel the auto-advance timer. Safe to call when none is armed.
    pub fn stop_auto_advance(&mut self) {
        if self.timer.stop(&mut self.scheduler) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "carousel.timer.stop", component = self.id.get());
        }
    }

    /// Pointer entered: pause auto-advance.
    pub fn on_hover_enter(&mut self) {
        self.hovered = true;
        self.stop_auto_advance();
    }

    /// Pointer left: resume auto-advance if enabled.
    pub fn on_hover_leave(&mut self) {
        self.hovered = false;
        if self.config.auto_advance {
            self.start_auto_advance(self.config.interval());
        }
    }

    /// Viewport changed: re-derive the visible-card-count and re-render.
    ///
    /// The index is kept unless the wider window no longer fits, in which
    /// case it is clamped to the new last window. An empty viewport (host
    /// not laid out yet) keeps the previous one.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        self.viewport = viewport;
        let max = self.max_index();
        if self.index > max {
            let from = self.index;
            self.index = max;
            self.log_transition("resize_clamp", from);
        }
        self.render();
    }

    /// Handle a timer firing. Returns `true` if `id` is the auto-advance timer.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.timer.owns(id) {
            return false;
        }
        self.advance();
        true
    }

    /// Run a manual navigation step, keeping a running cadence aligned to it.
    fn navigate(&mut self, step: impl FnOnce(&mut Self) -> bool) -> Outcome {
        let restart = self.timer.period();
        step(self);
        if let Some(period) = restart {
            self.start_auto_advance(period);
        }
        Outcome::Handled
    }

    #[cfg(feature = "tracing")]
    fn log_transition(&self, reason: &str, from: usize) {
        if from != self.index {
            tracing::debug!(
                message = "carousel.index",
                component = self.id.get(),
                reason,
                from,
                to = self.index
            );
        }
    }

    #[cfg(not(feature = "tracing"))]
    #[inline]
    fn log_transition(&self, _reason: &str, _from: usize) {}
}

impl<S: CarouselSurface, T: Scheduler> Component for CarouselController<S, T> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &'static str {
        "carousel"
    }

    fn handle_event(&mut self, event: &Event) -> Outcome {
        if !event.is_for(self.id) {
            return Outcome::Ignored;
        }
        match *event {
            Event::Click { part, .. } => match part {
                Part::Previous => self.navigate(Self::retreat),
                Part::Next => self.navigate(Self::advance),
                Part::Dot(dot) => self.navigate(|c| c.go_to(dot)),
                Part::Item(_) => Outcome::Ignored,
            },
            Event::PointerEnter { .. } => {
                self.on_hover_enter();
                Outcome::Handled
            }
            Event::PointerLeave { .. } => {
                self.on_hover_leave();
                Outcome::Handled
            }
            Event::Resize(viewport) => {
                self.on_resize(viewport);
                Outcome::Handled
            }
            Event::Timer(id) => {
                if self.on_timer(id) {
                    Outcome::Handled
                } else {
                    Outcome::Ignored
                }
            }
            Event::Submit { .. } => Outcome::Ignored,
        }
    }
}

impl<S: CarouselSurface, T: Scheduler> Drop for CarouselController<S, T> {
    fn drop(&mut self) {
        self.timer.stop(&mut self.scheduler);
    }
}

impl<S: CarouselSurface, T: Scheduler> fmt::Debug for CarouselController<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("id", &self.id)
            .field("card_count", &self.card_count)
            .field("viewport", &self.viewport)
            .field("index", &self.index)
            .field("hovered", &self.hovered)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ManualScheduler, RecordingCarousel};
    use pretty_assertions::assert_eq;

    const ID: ComponentId = ComponentId::new(1);
    const CARD: f64 = 300.0;

    fn desktop(cards: usize) -> RecordingCarousel {
        RecordingCarousel::new(cards, CARD).with_viewport(Viewport::new(1280.0, 800.0))
    }

    fn mobile(cards: usize) -> RecordingCarousel {
        RecordingCarousel::new(cards, CARD).with_viewport(Viewport::new(390.0, 844.0))
    }

    fn mount(
        surface: RecordingCarousel,
        config: CarouselConfig,
    ) -> (
        CarouselController<RecordingCarousel, ManualScheduler>,
        ManualScheduler,
    ) {
        let sched = ManualScheduler::new();
        let carousel = CarouselController::mount(ID, surface, sched.clone(), config)
            .expect("mount should succeed");
        (carousel, sched)
    }

    #[test]
    fn mount_renders_first_window() {
        let (c, _) = mount(desktop(6), CarouselConfig::default());
        let s = c.surface();
        assert_eq!(c.index(), 0);
        assert_eq!(s.translation, Some(0.0));
        assert_eq!(s.active_dots(), vec![0]);
        assert_eq!(s.previous, Some(Affordance::Dimmed));
        assert_eq!(s.next, Some(Affordance::Enabled));
    }

    #[test]
    fn mount_without_cards_or_container_fails() {
        let sched = ManualScheduler::new();
        let err = CarouselController::mount(
            ID,
            desktop(0),
            sched.clone(),
            CarouselConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, MountError::NoItems("carousel cards"));

        let err = CarouselController::mount(
            ID,
            desktop(3).without_container(),
            sched.clone(),
            CarouselConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, MountError::MissingSurface("carousel container"));
        assert_eq!(sched.armed_count(), 0);
    }

    #[test]
    fn six_cards_two_visible_wraps_after_four_steps() {
        let (mut c, _) = mount(desktop(6), CarouselConfig::default());
        assert_eq!(c.visible_card_count(), 2);
        let mut seen = vec![c.index()];
        for _ in 0..4 {
            c.advance();
            seen.push(c.index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(c.advance());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn translation_tracks_index() {
        let (mut c, _) = mount(desktop(6), CarouselConfig::default());
        for i in 0..=c.max_index() {
            c.go_to(i);
            assert_eq!(c.surface().translation, Some(i as f64 * (CARD + 40.0)));
        }
    }

    #[test]
    fn retreat_at_zero_clamps_by_default() {
        let (mut c, _) = mount(desktop(6), CarouselConfig::default());
        assert!(!c.retreat());
        let once = c.surface().clone();
        assert!(!c.retreat());
        assert_eq!(c.index(), 0);
        assert_eq!(c.surface().translation, once.translation);
        assert_eq!(c.surface().active_dots(), once.active_dots());
    }

    #[test]
    fn retreat_wraps_when_configured() {
        let config = CarouselConfig::default().wrap_on_manual_retreat(true);
        let (mut c, _) = mount(desktop(6), config);
        assert!(c.retreat());
        assert_eq!(c.index(), 4);
        assert_eq!(c.surface().next, Some(Affordance::Dimmed));
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let (mut c, _) = mount(desktop(6), CarouselConfig::default());
        c.go_to(99);
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn next_affordance_dims_at_last_window() {
        let (mut c, _) = mount(desktop(4), CarouselConfig::default());
        c.go_to(1);
        assert_eq!(c.surface().next, Some(Affordance::Enabled));
        c.go_to(2);
        assert_eq!(c.surface().next, Some(Affordance::Dimmed));
        assert_eq!(c.surface().previous, Some(Affordance::Enabled));
    }

    #[test]
    fn narrow_viewport_shows_one_card() {
        let (mut c, _) = mount(mobile(6), CarouselConfig::default());
        assert_eq!(c.visible_card_count(), 1);
        assert_eq!(c.max_index(), 5);
        c.go_to(5);
        assert_eq!(c.index(), 5);
    }

    #[test]
    fn breakpoint_boundary_counts_as_narrow() {
        let surface = RecordingCarousel::new(6, CARD).with_viewport(Viewport::new(1024.0, 768.0));
        let (c, _) = mount(surface, CarouselConfig::default());
        assert_eq!(c.visible_card_count(), 1);
    }

    #[test]
    fn single_card_desktop_config() {
        let config = CarouselConfig::default().desktop_visible_cards(1);
        let (c, _) = mount(desktop(6), config);
        assert_eq!(c.visible_card_count(), 1);
        assert_eq!(c.max_index(), 5);
    }

    #[test]
    fn fewer_cards_than_window_stays_at_zero() {
        let (mut c, _) = mount(desktop(1), CarouselConfig::default());
        assert_eq!(c.max_index(), 0);
        assert!(!c.advance());
        assert_eq!(c.index(), 0);
        assert_eq!(c.surface().next, Some(Affordance::Dimmed));
    }

    #[test]
    fn resize_keeps_index_when_it_fits() {
        let (mut c, _) = mount(mobile(6), CarouselConfig::default());
        c.go_to(3);
        c.handle_event(&Event::Resize(Viewport::new(1440.0, 900.0)));
        assert_eq!(c.index(), 3);
        assert_eq!(c.visible_card_count(), 2);
    }

    #[test]
    fn resize_event_viewport_drives_window() {
        let (mut c, _) = mount(desktop(6), CarouselConfig::default());
        c.go_to(4);
        assert_eq!(c.surface().next, Some(Affordance::Dimmed));
        // The surface still reports desktop; only the event carries the change.
        c.handle_event(&Event::Resize(Viewport::new(390.0, 844.0)));
        assert_eq!(c.viewport(), Viewport::new(390.0, 844.0));
        assert_eq!(c.max_index(), 5);
        assert_eq!(c.surface().next, Some(Affordance::Enabled));
        c.advance();
        assert_eq!(c.index(), 5);
        assert_eq!(c.surface().active_dots(), vec![5]);
    }

    #[test]
    fn empty_resize_keeps_last_viewport() {
        let (mut c, _) = mount(mobile(6), CarouselConfig::default());
        c.go_to(5);
        c.on_resize(Viewport::default());
        assert_eq!(c.viewport(), Viewport::new(390.0, 844.0));
        assert_eq!(c.index(), 5);
    }

    #[test]
    fn resize_clamps_when_window_grows_past_end() {
        let (mut c, _) = mount(mobile(6), CarouselConfig::default());
        c.go_to(5);
        assert_eq!(c.surface().next, Some(Affordance::Dimmed));
        c.on_resize(Viewport::new(1440.0, 900.0));
        assert_eq!(c.index(), 4);
        assert_eq!(c.surface().active_dots(), vec![4]);
    }

    #[test]
    fn dots_fewer_than_cards() {
        let surface = desktop(6).with_dots(3);
        let (mut c, _) = mount(surface, CarouselConfig::default());
        c.go_to(4);
        assert!(c.surface().active_dots().is_empty());
        c.go_to(2);
        assert_eq!(c.surface().active_dots(), vec![2]);
    }

    #[test]
    fn mount_starts_auto_advance() {
        let (c, sched) = mount(desktop(6), CarouselConfig::default());
        assert!(c.is_auto_advancing());
        let armed = sched.armed();
        assert_eq!(armed.len(), 1);
        assert_eq!(armed[0].period, Duration::from_millis(5000));
        assert!(armed[0].repeating);
    }

    #[test]
    fn auto_advance_disabled_never_arms() {
        let config = CarouselConfig::default().auto_advance(false);
        let (mut c, sched) = mount(desktop(6), config);
        c.on_hover_enter();
        c.on_hover_leave();
        assert_eq!(sched.armed_count(), 0);
        assert!(!c.is_auto_advancing());
    }

    #[test]
    fn owned_timer_advances_foreign_timer_ignored() {
        let (mut c, sched) = mount(desktop(6), CarouselConfig::default());
        let id = sched.armed()[0].id;
        let foreign = TimerId::new(id.get() + 1000);
        assert_eq!(c.handle_event(&Event::Timer(foreign)), Outcome::Ignored);
        assert_eq!(c.index(), 0);
        assert_eq!(c.handle_event(&Event::Timer(id)), Outcome::Handled);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn auto_advance_wraps_even_with_clamping_retreat() {
        let (mut c, sched) = mount(desktop(3), CarouselConfig::default());
        let id = sched.armed()[0].id;
        assert!(c.on_timer(id));
        assert_eq!(c.index(), 1);
        assert!(c.on_timer(id));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn hover_pauses_and_resumes() {
        let (mut c, sched) = mount(desktop(6), CarouselConfig::default());
        let first = sched.armed()[0].id;
        c.handle_event(&Event::PointerEnter { target: ID });
        assert!(c.is_hovered());
        assert!(!c.is_auto_advancing());
        assert!(!sched.is_armed(first));
        assert_eq!(c.handle_event(&Event::Timer(first)), Outcome::Ignored);

        c.handle_event(&Event::PointerLeave { target: ID });
        assert!(!c.is_hovered());
        assert_eq!(sched.armed_count(), 1);
        assert_ne!(sched.armed()[0].id, first);
    }

    #[test]
    fn manual_navigation_restarts_running_timer() {
        let (mut c, sched) = mount(desktop(6), CarouselConfig::default());
        let first = sched.armed()[0].id;
        c.handle_event(&Event::click(ID, Part::Next));
        assert_eq!(c.index(), 1);
        assert_eq!(sched.armed_count(), 1);
        assert_ne!(sched.armed()[0].id, first);
    }

    #[test]
    fn manual_navigation_while_hovered_stays_paused() {
        let (mut c, sched) = mount(desktop(6), CarouselConfig::default());
        c.handle_event(&Event::PointerEnter { target: ID });
        c.handle_event(&Event::click(ID, Part::Next));
        c.handle_event(&Event::click(ID, Part::Dot(3)));
        assert_eq!(c.index(), 3);
        assert_eq!(sched.armed_count(), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut c, sched) = mount(desktop(6), CarouselConfig::default());
        c.stop_auto_advance();
        c.stop_auto_advance();
        assert_eq!(sched.armed_count(), 0);
        assert_eq!(sched.cancelled().len(), 1);
    }

    #[test]
    fn start_replaces_existing_timer() {
        let (mut c, sched) = mount(desktop(6), CarouselConfig::default());
        c.start_auto_advance(Duration::from_millis(4000));
        c.start_auto_advance(Duration::from_millis(4000));
        assert_eq!(sched.armed_count(), 1);
        assert_eq!(sched.armed()[0].period, Duration::from_millis(4000));
    }

    #[test]
    fn events_for_other_components_are_ignored() {
        let (mut c, _) = mount(desktop(6), CarouselConfig::default());
        let other = ComponentId::new(2);
        assert_eq!(
            c.handle_event(&Event::click(other, Part::Next)),
            Outcome::Ignored
        );
        assert_eq!(
            c.handle_event(&Event::click(ID, Part::Item(0))),
            Outcome::Ignored
        );
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn drop_cancels_timer() {
        let (c, sched) = mount(desktop(6), CarouselConfig::default());
        assert_eq!(sched.armed_count(), 1);
        drop(c);
        assert_eq!(sched.armed_count(), 0);
    }
}
