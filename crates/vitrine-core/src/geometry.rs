#![forbid(unsafe_code)]

//! Geometric primitives.

/// Size of the host viewport in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if the viewport has no drawable area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether the width is at or below `breakpoint`.
    ///
    /// Breakpoints are inclusive on the narrow side: a viewport exactly
    /// `breakpoint` wide counts as narrow.
    #[inline]
    #[must_use]
    pub fn is_narrow(&self, breakpoint: f64) -> bool {
        self.width <= breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(Viewport::new(1024.0, 768.0).is_narrow(1024.0));
        assert!(!Viewport::new(1024.5, 768.0).is_narrow(1024.0));
        assert!(Viewport::new(320.0, 640.0).is_narrow(1024.0));
    }

    #[test]
    fn empty_viewport() {
        assert!(Viewport::default().is_empty());
        assert!(Viewport::new(0.0, 10.0).is_empty());
        assert!(!Viewport::new(1.0, 1.0).is_empty());
    }
}
