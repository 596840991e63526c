#![forbid(unsafe_code)]

//! Project accordion: at most one item expanded.

use core::fmt;

use vitrine_core::{ComponentId, Event, Part};

use crate::{Component, MountError, Outcome};

/// Host-side elements an [`Accordion`] drives.
pub trait AccordionSurface {
    /// Number of items. Read once at mount.
    fn item_count(&self) -> usize;

    /// Update an item's expanded marker.
    fn set_item_expanded(&mut self, item: usize, expanded: bool);
}

/// Single-open accordion.
pub struct Accordion<S: AccordionSurface> {
    id: ComponentId,
    surface: S,
    item_count: usize,
    expanded: Option<usize>,
}

impl<S: AccordionSurface> Accordion<S> {
    /// Attach to `surface` and collapse every item.
    ///
    /// # Errors
    ///
    /// [`MountError::NoItems`] when the surface has no items.
    pub fn mount(id: ComponentId, mut surface: S) -> Result<Self, MountError> {
        let item_count = surface.item_count();
        if item_count == 0 {
            return Err(MountError::NoItems("accordion items"));
        }
        for item in 0..item_count {
            surface.set_item_expanded(item, false);
        }
        Ok(Self {
            id,
            surface,
            item_count,
            expanded: None,
        })
    }

    /// Click on `item`: collapse it if open, otherwise open it and collapse
    /// the previously open one.
    ///
    /// Returns `false` for out-of-range items.
    pub fn toggle(&mut self, item: usize) -> bool {
        if item >= self.item_count {
            return false;
        }
        match self.expanded {
            Some(open) if open == item => {
                self.surface.set_item_expanded(item, false);
                self.expanded = None;
            }
            previous => {
                if let Some(open) = previous {
                    self.surface.set_item_expanded(open, false);
                }
                self.surface.set_item_expanded(item, true);
                self.expanded = Some(item);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "accordion.toggle",
            component = self.id.get(),
            item,
            expanded = ?self.expanded
        );
        true
    }

    /// The open item.
    #[inline]
    #[must_use]
    pub const fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// The surface this accordion drives.
    #[inline]
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: AccordionSurface> Component for Accordion<S> {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn name(&self) -> &'static str {
        "accordion"
    }

    fn handle_event(&mut self, event: &Event) -> Outcome {
        match *event {
            Event::Click {
                target,
                part: Part::Item(item),
            } if target == self.id && self.toggle(item) => Outcome::Handled,
            _ => Outcome::Ignored,
        }
    }
}

impl<S: AccordionSurface> fmt::Debug for Accordion<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accordion")
            .field("id", &self.id)
            .field("item_count", &self.item_count)
            .field("expanded", &self.expanded)
            .finish_non_exhaustive()
    }
}
