#![forbid(unsafe_code)]

//! Recording surfaces and a manual scheduler for tests.
//!
//! Every recorder stores the last value pushed by a component in public
//! fields so assertions can read them directly. [`ManualScheduler`] never
//! fires on its own: tests look up what was armed and feed
//! [`Event::Timer`] back in via [`ManualScheduler::fire`].
//! [`SharedSurface`] lets a test keep reading a surface after handing it to a
//! component that is boxed away (e.g. inside a runtime page).

use core::time::Duration;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::rc::Rc;

use ahash::AHashMap;
use vitrine_backend::{Notice, Notifier, Scheduler};
use vitrine_core::{Event, TimerId, Viewport};

use crate::accordion::AccordionSurface;
use crate::carousel::{Affordance, CarouselSurface, Control};
use crate::contact_form::{Field, FormSurface};
use crate::expander::ExpanderSurface;
use crate::smooth_scroll::{NavSurface, ScrollOptions};

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// A timer currently armed on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedTimer {
    /// Id handed out when armed.
    pub id: TimerId,
    /// Delay (one-shot) or period (repeating).
    pub period: Duration,
    /// Whether it re-arms after firing.
    pub repeating: bool,
}

#[derive(Debug, Default)]
struct ManualState {
    next_id: u64,
    armed: BTreeMap<TimerId, ArmedTimer>,
    cancelled: Vec<TimerId>,
}

/// Scheduler that only records. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    /// An empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Armed timers in creation order.
    #[must_use]
    pub fn armed(&self) -> Vec<ArmedTimer> {
        self.state.borrow().armed.values().copied().collect()
    }

    /// Number of armed timers.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.state.borrow().armed.len()
    }

    /// Whether `id` is armed.
    #[must_use]
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.state.borrow().armed.contains_key(&id)
    }

    /// Ids successfully cancelled, in order.
    #[must_use]
    pub fn cancelled(&self) -> Vec<TimerId> {
        self.state.borrow().cancelled.clone()
    }

    /// Simulate `id` firing.
    ///
    /// Returns the event to deliver, or `None` if `id` is not armed. One-shot
    /// timers are disarmed.
    pub fn fire(&self, id: TimerId) -> Option<Event> {
        let mut state = self.state.borrow_mut();
        let timer = *state.armed.get(&id)?;
        if !timer.repeating {
            state.armed.remove(&id);
        }
        Some(Event::Timer(id))
    }

    fn arm(&mut self, period: Duration, repeating: bool) -> TimerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = TimerId::new(state.next_id);
        state.armed.insert(
            id,
            ArmedTimer {
                id,
                period,
                repeating,
            },
        );
        id
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.arm(delay, false)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        self.arm(period, true)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let mut state = self.state.borrow_mut();
        let removed = state.armed.remove(&id).is_some();
        if removed {
            state.cancelled.push(id);
        }
        removed
    }
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// Carousel surface that records the last rendered state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCarousel {
    /// Number of cards.
    pub cards: usize,
    /// Number of dots.
    pub dots: usize,
    /// Measured card width.
    pub card_width: f64,
    /// Viewport reported to the controller.
    pub viewport: Viewport,
    /// Whether the container exists.
    pub container: bool,
    /// Last translation offset.
    pub translation: Option<f64>,
    /// Active flag per dot.
    pub dot_states: Vec<bool>,
    /// Last "previous" affordance.
    pub previous: Option<Affordance>,
    /// Last "next" affordance.
    pub next: Option<Affordance>,
    /// Number of translations applied.
    pub renders: usize,
}

impl RecordingCarousel {
    /// `cards` cards of `card_width`, one dot per card, 1280x800 viewport.
    #[must_use]
    pub fn new(cards: usize, card_width: f64) -> Self {
        Self {
            cards,
            dots: cards,
            card_width,
            viewport: Viewport::new(1280.0, 800.0),
            container: true,
            translation: None,
            dot_states: vec![false; cards],
            previous: None,
            next: None,
            renders: 0,
        }
    }

    /// Override the dot count.
    #[must_use]
    pub fn with_dots(mut self, dots: usize) -> Self {
        self.dots = dots;
        self.dot_states = vec![false; dots];
        self
    }

    /// Override the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Report a missing container.
    #[must_use]
    pub fn without_container(mut self) -> Self {
        self.container = false;
        self
    }

    /// Positions of active dots.
    #[must_use]
    pub fn active_dots(&self) -> Vec<usize> {
        self.dot_states
            .iter()
            .enumerate()
            .filter_map(|(dot, active)| active.then_some(dot))
            .collect()
    }
}

impl CarouselSurface for RecordingCarousel {
    fn has_container(&self) -> bool {
        self.container
    }

    fn card_count(&self) -> usize {
        self.cards
    }

    fn dot_count(&self) -> usize {
        self.dots
    }

    fn reference_card_width(&self) -> f64 {
        self.card_width
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_translation(&mut self, offset: f64) {
        self.translation = Some(offset);
        self.renders += 1;
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        if let Some(state) = self.dot_states.get_mut(dot) {
            *state = active;
        }
    }

    fn set_affordance(&mut self, control: Control, affordance: Affordance) {
        match control {
            Control::Previous => self.previous = Some(affordance),
            Control::Next => self.next = Some(affordance),
        }
    }
}

// ---------------------------------------------------------------------------
// Expander / accordion
// ---------------------------------------------------------------------------

/// Expander surface built from a list of triggers and regions.
#[derive(Debug, Clone, Default)]
pub struct RecordingToggles {
    targets: Vec<Option<String>>,
    trigger_states: Vec<Option<bool>>,
    regions: AHashMap<String, Option<bool>>,
}

impl RecordingToggles {
    /// No triggers, no regions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trigger pointing at `target`.
    #[must_use]
    pub fn trigger(mut self, target: Option<&str>) -> Self {
        self.targets.push(target.map(str::to_owned));
        self.trigger_states.push(None);
        self
    }

    /// Add a region.
    #[must_use]
    pub fn region(mut self, id: &str) -> Self {
        self.regions.insert(id.to_owned(), None);
        self
    }

    /// Last expanded flag pushed to `trigger`, if any.
    #[must_use]
    pub fn trigger_state(&self, trigger: usize) -> Option<bool> {
        self.trigger_states.get(trigger).copied().flatten()
    }

    /// Last expanded flag pushed to region `id`, if any.
    #[must_use]
    pub fn region_state(&self, id: &str) -> Option<bool> {
        self.regions.get(id).copied().flatten()
    }
}

impl ExpanderSurface for RecordingToggles {
    fn trigger_count(&self) -> usize {
        self.targets.len()
    }

    fn trigger_target(&self, trigger: usize) -> Option<String> {
        self.targets.get(trigger).cloned().flatten()
    }

    fn has_region(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    fn set_trigger_expanded(&mut self, trigger: usize, expanded: bool) {
        if let Some(state) = self.trigger_states.get_mut(trigger) {
            *state = Some(expanded);
        }
    }

    fn set_region_expanded(&mut self, region: &str, expanded: bool) {
        if let Some(state) = self.regions.get_mut(region) {
            *state = Some(expanded);
        }
    }
}

/// Accordion surface recording each item's expanded flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingAccordion {
    /// Expanded flag per item.
    pub items: Vec<bool>,
}

impl RecordingAccordion {
    /// `count` items, initially marked expanded so mount effects are visible.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            items: vec![true; count],
        }
    }
}

impl AccordionSurface for RecordingAccordion {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn set_item_expanded(&mut self, item: usize, expanded: bool) {
        if let Some(state) = self.items.get_mut(item) {
            *state = expanded;
        }
    }
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

/// Form surface with two text fields and a submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingForm {
    /// Name field.
    pub name: String,
    /// Email field.
    pub email: String,
    /// Submit button label.
    pub label: String,
    /// Submit button enabled.
    pub enabled: bool,
    /// Every label the button has shown, in order.
    pub label_history: Vec<String>,
    /// Number of resets.
    pub resets: usize,
    /// Whether the form element exists.
    pub present: bool,
}

impl RecordingForm {
    /// Empty fields, enabled button labelled `label`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            label: label.to_owned(),
            enabled: true,
            label_history: vec![label.to_owned()],
            resets: 0,
            present: true,
        }
    }

    /// Report a missing form element.
    #[must_use]
    pub fn without_form(mut self) -> Self {
        self.present = false;
        self
    }

    /// Pre-fill the fields.
    #[must_use]
    pub fn with_values(mut self, name: &str, email: &str) -> Self {
        self.name = name.to_owned();
        self.email = email.to_owned();
        self
    }
}

impl FormSurface for RecordingForm {
    fn has_form(&self) -> bool {
        self.present
    }

    fn field_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Email => self.email.clone(),
        }
    }

    fn submit_label(&self) -> String {
        self.label.clone()
    }

    fn set_submit_label(&mut self, label: &str) {
        label.clone_into(&mut self.label);
        self.label_history.push(label.to_owned());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.resets += 1;
    }
}

/// Notifier that keeps every notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    /// Notices in the order shown.
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Navigation surface with links, target elements, and a scroll log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNav {
    /// Link hrefs.
    pub links: Vec<String>,
    /// Element ids present on the page.
    pub elements: Vec<String>,
    /// Scroll requests in order.
    pub scrolls: Vec<(String, ScrollOptions)>,
}

impl RecordingNav {
    /// No links, no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link.
    #[must_use]
    pub fn link(mut self, href: &str) -> Self {
        self.links.push(href.to_owned());
        self
    }

    /// Add an element id.
    #[must_use]
    pub fn element(mut self, id: &str) -> Self {
        self.elements.push(id.to_owned());
        self
    }
}

impl NavSurface for RecordingNav {
    fn link_count(&self) -> usize {
        self.links.len()
    }

    fn link_href(&self, link: usize) -> Option<String> {
        self.links.get(link).cloned()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|element| element == id)
    }

    fn scroll_into_view(&mut self, id: &str, options: ScrollOptions) {
        self.scrolls.push((id.to_owned(), options));
    }
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// Cloneable handle to a surface or notifier. Clones see the same value.
#[derive(Debug, Default)]
pub struct SharedSurface<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> SharedSurface<T> {
    /// Wrap `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Borrow the wrapped value.
    ///
    /// # Panics
    ///
    /// If the value is mutably borrowed.
    #[must_use]
    pub fn get(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutably borrow the wrapped value, e.g. to type into a form.
    ///
    /// # Panics
    ///
    /// If the value is already borrowed.
    #[must_use]
    pub fn get_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }
}

impl<T> Clone for SharedSurface<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: CarouselSurface> CarouselSurface for SharedSurface<T> {
    fn has_container(&self) -> bool {
        self.get().has_container()
    }

    fn card_count(&self) -> usize {
        self.get().card_count()
    }

    fn dot_count(&self) -> usize {
        self.get().dot_count()
    }

    fn reference_card_width(&self) -> f64 {
        self.get().reference_card_width()
    }

    fn viewport(&self) -> Viewport {
        self.get().viewport()
    }

    fn set_translation(&mut self, offset: f64) {
        self.get_mut().set_translation(offset);
    }

    fn set_dot_active(&mut self, dot: usize, active: bool) {
        self.get_mut().set_dot_active(dot, active);
    }

    fn set_affordance(&mut self, control: Control, affordance: Affordance) {
        self.get_mut().set_affordance(control, affordance);
    }
}

impl<T: ExpanderSurface> ExpanderSurface for SharedSurface<T> {
    fn trigger_count(&self) -> usize {
        self.get().trigger_count()
    }

    fn trigger_target(&self, trigger: usize) -> Option<String> {
        self.get().trigger_target(trigger)
    }

    fn has_region(&self, region: &str) -> bool {
        self.get().has_region(region)
    }

    fn set_trigger_expanded(&mut self, trigger: usize, expanded: bool) {
        self.get_mut().set_trigger_expanded(trigger, expanded);
    }

    fn set_region_expanded(&mut self, region: &str, expanded: bool) {
        self.get_mut().set_region_expanded(region, expanded);
    }
}

impl<T: AccordionSurface> AccordionSurface for SharedSurface<T> {
    fn item_count(&self) -> usize {
        self.get().item_count()
    }

    fn set_item_expanded(&mut self, item: usize, expanded: bool) {
        self.get_mut().set_item_expanded(item, expanded);
    }
}

impl<T: FormSurface> FormSurface for SharedSurface<T> {
    fn has_form(&self) -> bool {
        self.get().has_form()
    }

    fn field_value(&self, field: Field) -> String {
        self.get().field_value(field)
    }

    fn submit_label(&self) -> String {
        self.get().submit_label()
    }

    fn set_submit_label(&mut self, label: &str) {
        self.get_mut().set_submit_label(label);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.get_mut().set_submit_enabled(enabled);
    }

    fn reset(&mut self) {
        self.get_mut().reset();
    }
}

impl<T: NavSurface> NavSurface for SharedSurface<T> {
    fn link_count(&self) -> usize {
        self.get().link_count()
    }

    fn link_href(&self, link: usize) -> Option<String> {
        self.get().link_href(link)
    }

    fn has_element(&self, id: &str) -> bool {
        self.get().has_element(id)
    }

    fn scroll_into_view(&mut self, id: &str, options: ScrollOptions) {
        self.get_mut().scroll_into_view(id, options);
    }
}

impl<T: Notifier> Notifier for SharedSurface<T> {
    fn notify(&mut self, notice: &Notice) {
        self.get_mut().notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_fires_one_shot_once() {
        let mut sched = ManualScheduler::new();
        let once = sched.schedule_once(Duration::from_millis(10));
        let every = sched.schedule_repeating(Duration::from_millis(20));
        assert_eq!(sched.fire(once), Some(Event::Timer(once)));
        assert_eq!(sched.fire(once), None);
        assert_eq!(sched.fire(every), Some(Event::Timer(every)));
        assert!(sched.is_armed(every));
    }

    #[test]
    fn cancel_is_recorded_once() {
        let mut sched = ManualScheduler::new();
        let id = sched.schedule_repeating(Duration::from_secs(1));
        assert!(sched.cancel(id));
        assert!(!sched.cancel(id));
        assert_eq!(sched.cancelled(), vec![id]);
    }

    #[test]
    fn shared_surface_clones_see_writes() {
        let shared = SharedSurface::new(RecordingCarousel::new(3, 100.0));
        let mut writer = shared.clone();
        writer.set_translation(42.0);
        assert_eq!(shared.get().translation, Some(42.0));
    }
}
