//! Mobile/desktop classification of the display surface.

use serde::{Deserialize, Serialize};

/// Display width at or below which the desktop switches to the mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: i32 = 768;

/// Current display dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

/// Tracks the viewport class and reports transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportClassifier {
    breakpoint: i32,
    current: Option<ViewportClass>,
}

impl Default for ViewportClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT)
    }
}

impl ViewportClassifier {
    pub const fn new(breakpoint: i32) -> Self {
        Self {
            breakpoint,
            current: None,
        }
    }

    /// Last observed class, `None` before the first observation.
    pub fn current(&self) -> Option<ViewportClass> {
        self.current
    }

    pub fn classify(&self, viewport: Viewport) -> ViewportClass {
        if viewport.width <= self.breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    /// Records a viewport change and returns the new class when it differs from the previous
    /// observation. The first observation always counts as a transition.
    pub fn observe(&mut self, viewport: Viewport) -> Option<ViewportClass> {
        let class = self.classify(viewport);
        if self.current == Some(class) {
            return None;
        }
        self.current = Some(class);
        Some(class)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn breakpoint_width_is_mobile() {
        let classifier = ViewportClassifier::default();
        assert_eq!(
            classifier.classify(Viewport::new(768, 1024)),
            ViewportClass::Mobile
        );
        assert_eq!(
            classifier.classify(Viewport::new(769, 1024)),
            ViewportClass::Desktop
        );
    }

    #[test]
    fn observe_reports_only_transitions() {
        let mut classifier = ViewportClassifier::default();
        assert_eq!(
            classifier.observe(Viewport::new(1280, 800)),
            Some(ViewportClass::Desktop)
        );
        assert_eq!(classifier.observe(Viewport::new(1000, 700)), None);
        assert_eq!(
            classifier.observe(Viewport::new(400, 800)),
            Some(ViewportClass::Mobile)
        );
        assert_eq!(classifier.current(), Some(ViewportClass::Mobile));
    }
}
