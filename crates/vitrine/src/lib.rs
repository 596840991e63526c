#![forbid(unsafe_code)]

//! Vitrine public facade crate.
//!
//! Re-exports the component, backend, and runtime types a host needs to wire
//! an interactive landing page (testimonials carousel, expandable service
//! cards, project accordion, contact form, smooth-scrolling navigation) and
//! offers a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use vitrine_core::logging::{LogFormat, LoggingInitError};
pub use vitrine_core::{ComponentId, Event, Part, TimerId, Viewport};

#[cfg(feature = "tracing-json")]
pub use vitrine_core::logging::init_logging;

// --- Backend re-exports ----------------------------------------------------

pub use vitrine_backend::{BackendClock, Notice, NoticeKind, Notifier, Scheduler, SystemClock};

// --- Widget re-exports -----------------------------------------------------

pub use vitrine_widgets::accordion::{Accordion, AccordionSurface};
pub use vitrine_widgets::carousel::{
    Affordance, CarouselConfig, CarouselController, CarouselSurface, Control,
};
pub use vitrine_widgets::contact_form::{
    ContactForm, ContactFormConfig, Field, FormSurface, Submission, SubmitStatus, ValidationError,
};
pub use vitrine_widgets::expander::{Expander, ExpanderSurface};
pub use vitrine_widgets::smooth_scroll::{
    NavSurface, ScrollBehavior, ScrollBlock, ScrollOptions, SmoothScroll,
};
pub use vitrine_widgets::{Component, MountError, Outcome};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use vitrine_runtime::{ConfigError, Page, VirtualScheduler, VitrineConfig, WallClockDriver};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Vitrine hosts.
#[derive(Debug)]
pub enum Error {
    /// A component's markup is missing or empty.
    Mount(MountError),
    /// Contact-form input was rejected.
    Validation(ValidationError),
    /// Configuration could not be loaded or is out of range.
    #[cfg(feature = "runtime")]
    Config(ConfigError),
    /// The log subscriber could not be installed.
    Logging(LoggingInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mount(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mount(err) => Some(err),
            Self::Validation(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Config(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<MountError> for Error {
    fn from(err: MountError) -> Self {
        Self::Mount(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

#[cfg(feature = "runtime")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LoggingInitError> for Error {
    fn from(err: LoggingInitError) -> Self {
        Self::Logging(err)
    }
}

/// Standard result type for Vitrine APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Accordion, CarouselConfig, CarouselController, Component, ComponentId, ContactForm,
        ContactFormConfig, Error, Event, Expander, MountError, Outcome, Part, Result, Scheduler,
        SmoothScroll, Viewport,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{Page, VirtualScheduler, VitrineConfig};

    pub use crate::{backend, core, widgets};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use vitrine_backend as backend;
pub use vitrine_core as core;
#[cfg(feature = "runtime")]
pub use vitrine_runtime as runtime;
pub use vitrine_widgets as widgets;
