#![forbid(unsafe_code)]

//! Expandable service cards.
//!
//! Each trigger names a content region by identifier. Clicking a trigger
//! flips the "expanded" flag on both the trigger and its region. Regions are
//! tracked by identifier, so two triggers pointing at the same region share
//! its state while keeping their own trigger flag.

use core::fmt;

use ahash::AHashSet;
use vitrine_core::{ComponentId, Event, Part};

use crate::{Component, MountError, Outcome};

/// Host-side elements an [`Expander`] drives.
pub trait ExpanderSurface {
    /// Number of triggers.
    fn trigger_count(&self) -> usize;

    /// Identifier of the region `trigger` controls, if it declares one.
    fn trigger_target(&self, trigger: usize) -> Option<String>;

    /// Whether a region with this identifier exists.
    fn has_region(&self, region: &str) -> bool;

    /// Update a trigger's expanded marker.
    fn set_trigger_expanded(&mut self, trigger: usize, expanded: bool);

    /// Update a region's expanded marker.
    fn set_region_expanded(&mut self, region: &str, expanded: bool);
}

/// Toggles content regions from their triggers.
pub struct Expander<S: ExpanderSurface> {
    id: ComponentId,
    surface: S,
    triggers: Vec<bool>,
    regions: AHashSet<String>,
}

impl<S: ExpanderSurface> Expander<S> {
    /// Attach to `surface`. Everything starts collapsed.
    ///
    /// # Errors
    ///
    /// [`MountError::NoItems`] when the surface has no triggers.
    pub fn mount(id: ComponentId, surface: S) -> Result<Self, MountError> {
        let count = surface.trigger_count();
        if count == 0 {
            return Err(MountError::NoItems("expander triggers"));
        }
        Ok(Self {
            id,
            surface,
            triggers: vec![false; count],
            regions: AHashSet::new(),
        })
    }

    /// Toggle `trigger` and its region.
    ///
    /// Returns the region's new state, or `None` when the trigger is out of
    /// range, names no region, or names a region that does not exist.
    pub fn toggle(&mut self, trigger: usize) -> Option<bool> {
        let flag = self.triggers.get_mut(trigger)?;
        let region = self.surface.trigger_target(trigger)?;
        if !self.surface.has_region(&region) {
            return None;
        }

        *flag = !*flag;
        let trigger_expanded = *flag;
        let region_expanded = if self.regions.remove(&region) {
            false
        } else {
            self.regions.insert(region.clone());
            true
        };

        self.surface.set_region_expanded(&region, region_expanded);
        self.surface.set_trigger_expanded(trigger, trigger_expanded);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "expander.toggle",
            component = self.id.get(),
            trigger,
            region = %region,
            expanded = region_expanded
        );
        Some(region_expanded)
    }

    /// Whether `trigger` is marked expanded.
    #[must_use]
    pub fn is_trigger_expanded(&self, trigger: usize) -> bool {
        self.triggers.get(trigger).copied().unwrap_or(false)
    }

    /// Whether the region is expanded.
    #[must_use]
    pub fn is_region_expanded(&self, region: &str) -> bool {
        self.regions.contains(region)
    }

    /// The surface this expander drives.
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: ExpanderSurface> Component for Expander<S> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &'static str {
        "expander"
    }

    fn handle_event(&mut self, event: &Event) -> Outcome {
        match *event {
            Event::Click {
                target,
                part: Part::Item(trigger),
            } if target == self.id => match self.toggle(trigger) {
                Some(_) => Outcome::Handled,
                None => Outcome::Ignored,
            },
            _ => Outcome::Ignored,
        }
    }
}

impl<S: ExpanderSurface> fmt::Debug for Expander<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander")
            .field("id", &self.id)
            .field("triggers", &self.triggers)
            .field("regions", &self.regions)
            .finish_non_exhaustive()
    }
}
