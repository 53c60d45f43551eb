//! Scroll positions and the seam to the page's scroll surface.

use crate::{error::NavError, registry::SectionRegistry};

/// How a jump to an anchor is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll, used for sidebar clicks.
    Smooth,
    /// Immediate jump, used when restoring a deep link on load.
    Instant,
}

/// The page surface the controller scrolls and measures.
///
/// Implemented over the DOM in the UI crate. Positions are CSS pixels
/// relative to the top of the viewport, negative once an anchor has scrolled
/// past it.
pub trait ScrollHost {
    /// Scroll so the anchor for `id` is at the top of the viewport.
    fn scroll_to_anchor(&mut self, id: &str, behavior: ScrollBehavior) -> Result<(), NavError>;

    /// Current top of the anchor for `id`, or `None` if there is no such element.
    fn anchor_top(&self, id: &str) -> Option<f64>;

    /// Whether the document is scrolled all the way down.
    fn at_bottom(&self) -> bool;

    /// Whether the document is taller than the viewport.
    fn scrollable(&self) -> bool;

    /// Measure every registered section.
    ///
    /// A document that fits the viewport is never reported as at the bottom.
    fn snapshot(&self, registry: &SectionRegistry) -> ScrollSnapshot {
        ScrollSnapshot {
            anchors: registry
                .iter()
                .filter_map(|s| self.anchor_top(&s.id).map(|top| (s.id.clone(), top)))
                .collect(),
            at_bottom: self.scrollable() && self.at_bottom(),
        }
    }
}

/// A host with no anchors that accepts every scroll request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullScrollHost;

impl ScrollHost for NullScrollHost {
    fn scroll_to_anchor(&mut self, _id: &str, _behavior: ScrollBehavior) -> Result<(), NavError> {
        Ok(())
    }

    fn anchor_top(&self, _id: &str) -> Option<f64> {
        None
    }

    fn at_bottom(&self) -> bool {
        false
    }

    fn scrollable(&self) -> bool {
        false
    }
}

/// Anchor positions at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSnapshot {
    /// `(section id, top)` for every section that has an anchor element.
    pub anchors: Vec<(String, f64)>,

    /// Whether a scrollable document is scrolled all the way down.
    pub at_bottom: bool,
}

impl ScrollSnapshot {
    /// Build a snapshot from borrowed ids.
    pub fn new<'a>(anchors: impl IntoIterator<Item = (&'a str, f64)>, at_bottom: bool) -> Self {
        Self {
            anchors: anchors
                .into_iter()
                .map(|(id, top)| (id.to_string(), top))
                .collect(),
            at_bottom,
        }
    }

    /// Measured top of the anchor for `id`.
    pub fn top_of(&self, id: &str) -> Option<f64> {
        self.anchors
            .iter()
            .find(|(anchor, _)| anchor == id)
            .map(|(_, top)| *top)
    }
}

/// Pick the section the reader is looking at.
///
/// Walks sections in registry order and keeps the last one whose anchor top
/// is at or above `offset_px`. Sections without anchors are skipped. When
/// the page is scrolled to the bottom the last anchored section wins, since
/// short trailing sections can never reach the offset line. When no anchor
/// has reached the line yet, the first section is returned.
pub fn nearest_section<'r>(
    registry: &'r SectionRegistry,
    snapshot: &ScrollSnapshot,
    offset_px: f64,
) -> &'r str {
    let mut current = None;
    let mut last_anchored = None;

    for section in registry {
        let Some(top) = snapshot.top_of(&section.id) else {
            continue;
        };
        last_anchored = Some(section.id.as_str());
        if top <= offset_px {
            current = Some(section.id.as_str());
        }
    }

    if snapshot.at_bottom {
        if let Some(last) = last_anchored {
            return last;
        }
    }

    current.unwrap_or(registry.first().id.as_str())
}
