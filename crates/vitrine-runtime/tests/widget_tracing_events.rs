#![forbid(unsafe_code)]

//! Component-level log events.
//!
//! With `widget-tracing` on, the carousel and contact form emit structured
//! debug events for every state change. These tests capture them with their
//! fields through a page on a virtual timeline.
//!
//! Run:
//!   cargo test -p vitrine-runtime --features widget-tracing --test widget_tracing_events

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use tracing::field::{Field, Visit};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use vitrine_core::{Event, Part};
use vitrine_runtime::Page;
use vitrine_widgets::carousel::{CarouselConfig, CarouselController};
use vitrine_widgets::contact_form::{ContactForm, ContactFormConfig};
use vitrine_widgets::testing::{RecordingCarousel, RecordingForm, RecordingNotifier, SharedSurface};

// ============================================================================
// Test Infrastructure
// ============================================================================

type Fields = BTreeMap<String, String>;

#[derive(Default)]
struct FieldVisitor(Fields);

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }
}

struct FieldCapture {
    events: Arc<Mutex<Vec<Fields>>>,
}

impl<S: tracing::Subscriber> Layer<S> for FieldCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("vitrine_widgets") {
            return;
        }
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().expect("capture lock").push(visitor.0);
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Fields> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(FieldCapture {
        events: Arc::clone(&events),
    });
    tracing::subscriber::with_default(subscriber, f);
    events.lock().expect("capture lock").clone()
}

fn messages(events: &[Fields]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|fields| fields.get("message").map(String::as_str))
        .collect()
}

fn find<'e>(events: &'e [Fields], message: &str) -> &'e Fields {
    events
        .iter()
        .find(|fields| fields.get("message").is_some_and(|m| m == message))
        .unwrap_or_else(|| panic!("no {message} event in {events:?}"))
}

fn field<'f>(fields: &'f Fields, name: &str) -> &'f str {
    fields.get(name).map_or("<missing>", String::as_str)
}

// ============================================================================
// Carousel
// ============================================================================

#[test]
fn next_click_logs_index_transition() {
    let events = capture(|| {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = CarouselController::mount(
            id,
            RecordingCarousel::new(6, 300.0),
            page.scheduler().clone(),
            CarouselConfig::default().auto_advance(false),
        );
        page.try_mount(mounted).expect("carousel mounts");
        page.dispatch(&Event::click(id, Part::Next));
    });

    let transition = find(&events, "carousel.index");
    assert_eq!(field(transition, "reason"), "advance");
    assert_eq!(field(transition, "from"), "0");
    assert_eq!(field(transition, "to"), "1");
}

#[test]
fn retreat_at_start_logs_nothing() {
    let events = capture(|| {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = CarouselController::mount(
            id,
            RecordingCarousel::new(6, 300.0),
            page.scheduler().clone(),
            CarouselConfig::default().auto_advance(false),
        );
        page.try_mount(mounted).expect("carousel mounts");
        page.dispatch(&Event::click(id, Part::Previous));
    });
    assert!(!messages(&events).contains(&"carousel.index"));
}

#[test]
fn hover_logs_timer_stop_and_start() {
    let events = capture(|| {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = CarouselController::mount(
            id,
            RecordingCarousel::new(6, 300.0),
            page.scheduler().clone(),
            CarouselConfig::default(),
        );
        page.try_mount(mounted).expect("carousel mounts");
        page.dispatch(&Event::PointerEnter { target: id });
        page.dispatch(&Event::PointerLeave { target: id });
        page.advance(Duration::from_millis(5000));
    });

    let timeline: Vec<&str> = messages(&events)
        .into_iter()
        .filter(|m| m.starts_with("carousel.timer"))
        .collect();
    assert_eq!(
        timeline,
        vec!["carousel.timer.start", "carousel.timer.stop", "carousel.timer.start"]
    );
    assert_eq!(field(find(&events, "carousel.timer.start"), "interval_ms"), "5000");

    let tick = find(&events, "carousel.index");
    assert_eq!(field(tick, "from"), "0");
    assert_eq!(field(tick, "to"), "1");
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn invalid_email_logs_rejection() {
    let events = capture(|| {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = ContactForm::mount(
            id,
            RecordingForm::new("Send Message").with_values("Ada", "ada-at-example"),
            page.scheduler().clone(),
            RecordingNotifier::default(),
            ContactFormConfig::default(),
        );
        page.try_mount(mounted).expect("form mounts");
        page.dispatch(&Event::Submit { target: id });
    });

    let rejected = find(&events, "form.submit.rejected");
    assert_eq!(field(rejected, "reason"), "InvalidEmail");
    assert!(!messages(&events).contains(&"form.submit.sending"));
}

#[test]
fn submission_lifecycle_is_logged() {
    let fields = SharedSurface::new(RecordingForm::new("Send Message").with_values("Ada", ""));
    let events = capture(|| {
        let mut page = Page::default();
        let id = page.allocate_id();
        let mounted = ContactForm::mount(
            id,
            fields.clone(),
            page.scheduler().clone(),
            RecordingNotifier::default(),
            ContactFormConfig::default(),
        );
        page.try_mount(mounted).expect("form mounts");

        page.dispatch(&Event::Submit { target: id });
        fields.get_mut().email = "ada@example.com".to_owned();
        page.dispatch(&Event::Submit { target: id });
        page.dispatch(&Event::Submit { target: id });
        page.advance(Duration::from_millis(1500));
    });

    assert_eq!(
        messages(&events),
        vec![
            "form.submit.rejected",
            "form.submit.sending",
            "form.submit.busy",
            "form.submit.done",
        ]
    );
    assert_eq!(field(find(&events, "form.submit.rejected"), "reason"), "MissingFields");
    assert_eq!(field(find(&events, "form.submit.sending"), "delay_ms"), "1500");
}
