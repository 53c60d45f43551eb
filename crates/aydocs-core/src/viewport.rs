//! Narrow/wide viewport classification.

use serde::{Deserialize, Serialize};

/// Layout class of the viewport.
///
/// On narrow viewports the sidebar is an overlay behind a menu button; on
/// wide viewports it is always visible and the overlay has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    #[default]
    Narrow,
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width against the breakpoint. The breakpoint itself is wide.
    pub fn classify(width_px: f64, breakpoint_px: u32) -> Self {
        if width_px >= f64::from(breakpoint_px) {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Wide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ViewportClass::classify(375.0, 1024), ViewportClass::Narrow);
        assert_eq!(ViewportClass::classify(1023.5, 1024), ViewportClass::Narrow);
        assert_eq!(ViewportClass::classify(1024.0, 1024), ViewportClass::Wide);
        assert_eq!(ViewportClass::classify(1920.0, 1024), ViewportClass::Wide);
    }

    #[test]
    fn test_default_is_narrow() {
        assert!(!ViewportClass::default().is_wide());
    }
}
