#![forbid(unsafe_code)]

//! Contact form submission.
//!
//! Validation is synchronous: a non-empty name and an email of the shape
//! `local@domain.tld`. A valid submission is "sent" by holding the form in a
//! sending state for a fixed delay (no network call): the submit button is
//! disabled and relabelled, a one-shot timer is armed, and when it fires the
//! user is thanked, the fields are cleared, and the button restored.
//!
//! The disabled button is the only guard against double submission; a
//! submit that arrives while sending is dropped.

use core::fmt;
use core::time::Duration;
use std::sync::LazyLock;

use regex::Regex;
use vitrine_backend::{Notice, Notifier, Scheduler};
use vitrine_core::{ComponentId, Event, TimerId};

use crate::timer::TimerSlot;
use crate::{Component, MountError, Outcome};

/// How long the simulated submission takes.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
/// Button label while sending.
pub const DEFAULT_SENDING_LABEL: &str = "Sending...";
/// Notice shown once the submission completes.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you soon.";

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

/// Whether `email` has the shape `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(email))
}

/// Contact form knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContactFormConfig {
    /// Simulated submission time in milliseconds.
    pub submit_delay_ms: u64,
    /// Submit button label while sending.
    pub sending_label: String,
    /// Notice shown after a successful submission.
    pub success_message: String,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            sending_label: DEFAULT_SENDING_LABEL.to_owned(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
        }
    }
}

impl ContactFormConfig {
    /// Set the simulated submission time.
    #[must_use]
    pub fn submit_delay_ms(mut self, ms: u64) -> Self {
        self.submit_delay_ms = ms;
        self
    }

    /// Set the label shown while sending.
    #[must_use]
    pub fn sending_label(mut self, label: impl Into<String>) -> Self {
        self.sending_label = label.into();
        self
    }

    /// Set the success notice.
    #[must_use]
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Submission delay as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
}

/// Host-side elements a [`ContactForm`] reads and drives.
pub trait FormSurface {
    /// Whether the form element exists.
    fn has_form(&self) -> bool {
        true
    }

    /// Current raw value of `field`.
    fn field_value(&self, field: Field) -> String;

    /// Current submit button label.
    fn submit_label(&self) -> String;

    /// Replace the submit button label.
    fn set_submit_label(&mut self, label: &str);

    /// Enable or disable the submit button.
    fn set_submit_enabled(&mut self, enabled: bool);

    /// Clear every field.
    fn reset(&mut self);
}

/// Why a submission was rejected.
///
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Name or email is blank.
    MissingFields,
    /// Email does not look like `local@domain.tld`.
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => f.write_str("Please fill in all fields."),
            Self::InvalidEmail => f.write_str("Please enter a valid email address."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Trimmed name.
    pub name: String,
    /// Trimmed email.
    pub email: String,
}

/// Validate raw field values.
///
/// # Errors
///
/// [`ValidationError::MissingFields`] if either value is blank after
/// trimming, otherwise [`ValidationError::InvalidEmail`] for a malformed
/// email.
pub fn validate(name: &str, email: &str) -> Result<Submission, ValidationError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(Submission {
        name: name.to_owned(),
        email: email.to_owned(),
    })
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Validation failed; the user was notified.
    Rejected(ValidationError),
    /// Accepted; the form is sending until the timer fires.
    Sending(Submission),
    /// A previous submission is still sending; nothing happened.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Sending { restore_label: String },
}

/// Contact form controller.
pub struct ContactForm<S: FormSurface, T: Scheduler, N: Notifier> {
    id: ComponentId,
    surface: S,
    scheduler: T,
    notifier: N,
    config: ContactFormConfig,
    phase: Phase,
    timer: TimerSlot,
}

impl<S: FormSurface, T: Scheduler, N: Notifier> ContactForm<S, T, N> {
    /// Attach to `surface`.
    ///
    /// # Errors
    ///
    /// [`MountError::MissingSurface`] when the page has no contact form.
    pub fn mount(
        id: ComponentId,
        surface: S,
        scheduler: T,
        notifier: N,
        config: ContactFormConfig,
    ) -> Result<Self, MountError> {
        if !surface.has_form() {
            return Err(MountError::MissingSurface("contact form"));
        }
        Ok(Self {
            id,
            surface,
            scheduler,
            notifier,
            config,
            phase: Phase::Idle,
            timer: TimerSlot::new(),
        })
    }

    /// Validate and start sending.
    pub fn submit(&mut self) -> SubmitStatus {
        if self.is_sending() {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "form.submit.busy", component = self.id.get());
            return SubmitStatus::Busy;
        }

        let name = self.surface.field_value(Field::Name);
        let email = self.surface.field_value(Field::Email);
        let submission = match validate(&name, &email) {
            Ok(submission) => submission,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "form.submit.rejected",
                    component = self.id.get(),
                    reason = ?err
                );
                self.notifier.notify(&Notice::error(err.to_string()));
                return SubmitStatus::Rejected(err);
            }
        };

        let restore_label = self.surface.submit_label();
        self.surface.set_submit_label(&self.config.sending_label);
        self.surface.set_submit_enabled(false);
        self.timer
            .start_once(&mut self.scheduler, self.config.submit_delay());
        self.phase = Phase::Sending { restore_label };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "form.submit.sending",
            component = self.id.get(),
            delay_ms = self.config.submit_delay_ms
        );
        SubmitStatus::Sending(submission)
    }

    /// Handle a timer firing. Returns `true` if it completed the submission.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.timer.clear_fired(id) {
            return false;
        }
        let Phase::Sending { restore_label } =
            core::mem::replace(&mut self.phase, Phase::Idle)
        else {
            return false;
        };

        self.notifier
            .notify(&Notice::success(self.config.success_message.clone()));
        self.surface.reset();
        self.surface.set_submit_label(&restore_label);
        self.surface.set_submit_enabled(true);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "form.submit.done", component = self.id.get());
        true
    }

    /// Whether a submission is in flight.
    #[inline]
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending { .. })
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    /// The surface this form drives.
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. for a host to type into fields.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The notifier notices go to.
    #[inline]
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<S: FormSurface, T: Scheduler, N: Notifier> Component for ContactForm<S, T, N> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &'static str {
        "contact_form"
    }

    fn handle_event(&mut self, event: &Event) -> Outcome {
        match *event {
            Event::Submit { target } if target == self.id => {
                self.submit();
                Outcome::PreventDefault
            }
            Event::Timer(id) if self.on_timer(id) => Outcome::Handled,
            _ => Outcome::Ignored,
        }
    }
}

impl<S: FormSurface, T: Scheduler, N: Notifier> Drop for ContactForm<S, T, N> {
    fn drop(&mut self) {
        self.timer.stop(&mut self.scheduler);
    }
}

impl<S: FormSurface, T: Scheduler, N: Notifier> fmt::Debug for ContactForm<S, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}
