#![forbid(unsafe_code)]

//! Runtime for Vitrine pages.
//!
//! - [`scheduler::VirtualScheduler`]: deterministic, host-driven timers.
//! - [`page::Page`]: mounts components and routes events and timer firings.
//! - [`driver::WallClockDriver`]: maps real elapsed time onto the timeline.
//! - [`config::VitrineConfig`]: component tunables, loadable from TOML/JSON
//!   with the `config` feature.
//!
//! The runtime logs through `tracing` under the `vitrine.page`,
//! `vitrine.driver`, and `vitrine.config` targets.

pub mod config;
pub mod driver;
pub mod page;
pub mod scheduler;

pub use config::{ConfigError, VitrineConfig};
pub use driver::WallClockDriver;
pub use page::Page;
pub use scheduler::VirtualScheduler;
