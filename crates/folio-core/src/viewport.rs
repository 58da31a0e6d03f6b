//! Viewport breakpoints (Bootstrap widths).

use serde::{Deserialize, Serialize};

/// Named minimum widths, in CSS pixels
#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn min_width(&self) -> f64 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 576.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 992.0,
            Breakpoint::Xl => 1200.0,
            Breakpoint::Xxl => 1400.0,
        }
    }

    /// Largest breakpoint whose minimum fits `width`
    pub fn for_width(width: f64) -> Self {
        [
            Breakpoint::Xxl,
            Breakpoint::Xl,
            Breakpoint::Lg,
            Breakpoint::Md,
            Breakpoint::Sm,
        ]
        .into_iter()
        .find(|bp| width >= bp.min_width())
        .unwrap_or(Breakpoint::Xs)
    }
}

/// Current viewport size
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        // Matches the default desktop window
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the viewport is at least as wide as `bp`
    pub fn is_breakpoint(&self, bp: Breakpoint) -> bool {
        self.width >= bp.min_width()
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }

    /// Below `lg` the gallery stacks vertically
    pub fn is_mobile(&self) -> bool {
        !self.is_breakpoint(Breakpoint::Lg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_for_width() {
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(576.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(991.0), Breakpoint::Md);
        assert_eq!(Breakpoint::for_width(992.0), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1920.0), Breakpoint::Xxl);
    }

    #[test]
    fn test_is_mobile_boundary() {
        assert!(Viewport::new(991.9, 800.0).is_mobile());
        assert!(!Viewport::new(992.0, 800.0).is_mobile());
    }

    #[test]
    fn test_default_is_desktop() {
        assert!(!Viewport::default().is_mobile());
    }
}
