#![forbid(unsafe_code)]

//! Core: canonical events, identifiers, and geometry for Vitrine.
//!
//! # Role in Vitrine
//! `vitrine-core` is the input layer. It owns the event vocabulary that the
//! host pushes into the page (clicks, pointer transitions, submits, resizes,
//! timer firings) and the small identifier types shared by every other crate.
//!
//! # How it fits in the system
//! Components in `vitrine-widgets` consume [`event::Event`] values. The
//! runtime (`vitrine-runtime`) routes them and turns scheduler firings into
//! [`event::Event::Timer`]. Nothing here touches a rendering surface, so the
//! crate stays free of platform dependencies.

pub mod event;
pub mod geometry;
pub mod logging;

pub use event::{ComponentId, Event, Part, TimerId};
pub use geometry::Viewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, info_span, trace, warn};
