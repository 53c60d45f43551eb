//! In-page section navigation controller.
//!
//! Owns the active section and the mobile overlay flag for one page. The
//! two are independent: the active section changes through [`activate`],
//! scroll-spy, or a registry swap; the overlay opens and closes through the
//! menu button, the backdrop, a section jump, or a resize to wide.
//!
//! [`activate`]: NavigationController::activate

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    config::NavigationConfig,
    fragment::parse_fragment,
    registry::SectionRegistry,
    scroll::{ScrollBehavior, ScrollHost, ScrollSnapshot, nearest_section},
    viewport::ViewportClass,
};

/// What the rendering surface reads to highlight the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    active_section_id: String,
    overlay_open: bool,
}

impl NavigationState {
    /// Id of the highlighted section. Always a member of the current registry.
    pub fn active_section_id(&self) -> &str {
        &self.active_section_id
    }

    /// Whether the mobile overlay is showing.
    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }
}

/// An explicit jump that scroll-spy must not fight while the smooth scroll runs.
#[derive(Debug, Clone, PartialEq)]
struct PendingJump {
    target: String,
    /// Set on the first scroll sample after the jump.
    deadline_ms: Option<f64>,
}

/// Navigation state machine for one page instance.
#[derive(Debug, Clone)]
pub struct NavigationController {
    registry: SectionRegistry,
    config: NavigationConfig,
    state: NavigationState,
    viewport: ViewportClass,
    pending: Option<PendingJump>,
    /// Jump target kept active while the page rests at the bottom.
    held: Option<String>,
    deep_linked: bool,
}

impl NavigationController {
    /// Create a controller with the first section active and the overlay closed.
    pub fn new(registry: SectionRegistry, config: NavigationConfig) -> Self {
        let state = NavigationState {
            active_section_id: registry.first().id.clone(),
            overlay_open: false,
        };

        Self {
            registry,
            config,
            state,
            viewport: ViewportClass::default(),
            pending: None,
            held: None,
            deep_linked: false,
        }
    }

    /// Create a controller honoring an inbound `#section` fragment.
    ///
    /// A fragment naming a known section makes it the initial active section;
    /// anything else falls back to [`NavigationController::new`]. Ignored when
    /// `honor_fragment` is off.
    pub fn with_fragment(
        registry: SectionRegistry,
        config: NavigationConfig,
        hash: Option<&str>,
    ) -> Self {
        let target = hash
            .filter(|_| config.honor_fragment)
            .and_then(parse_fragment)
            .filter(|id| registry.contains(id))
            .map(str::to_string);

        let mut controller = Self::new(registry, config);
        if let Some(id) = target {
            debug!(section = %id, "initial section from URL fragment");
            controller.state.active_section_id = id;
            controller.deep_linked = true;
        }
        controller
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Whether `id` is the highlighted section.
    pub fn is_active(&self, id: &str) -> bool {
        self.state.active_section_id == id
    }

    /// Jump to a section.
    ///
    /// Unknown ids are ignored and leave the state untouched. For a known id
    /// the section becomes active, the overlay closes, and the host is asked
    /// for a smooth scroll. A missing anchor only skips the scroll. Returns
    /// whether the id was accepted.
    pub fn activate<H>(&mut self, id: &str, host: &mut H) -> bool
    where
        H: ScrollHost + ?Sized,
    {
        let Some(section) = self.registry.get(id) else {
            debug!(section = %id, "ignoring activation of unknown section");
            return false;
        };

        let id = section.id.clone();
        debug!(section = %id, "activating section");
        self.state.active_section_id = id.clone();
        self.state.overlay_open = false;
        self.deep_linked = false;
        self.held = None;

        // A second jump during an in-flight scroll simply retargets it.
        self.pending = match host.scroll_to_anchor(&id, ScrollBehavior::Smooth) {
            Ok(()) => Some(PendingJump {
                target: id,
                deadline_ms: None,
            }),
            Err(err) => {
                warn!(error = %err, "skipping scroll");
                None
            }
        };

        true
    }

    /// Scroll instantly to a section selected by the URL fragment.
    ///
    /// Does nothing unless the controller was deep-linked and no jump has
    /// happened since. Returns whether a scroll was requested.
    pub fn restore_deep_link<H>(&mut self, host: &mut H) -> bool
    where
        H: ScrollHost + ?Sized,
    {
        if !std::mem::take(&mut self.deep_linked) {
            return false;
        }

        let id = self.state.active_section_id.clone();
        match host.scroll_to_anchor(&id, ScrollBehavior::Instant) {
            Ok(()) => {
                self.pending = Some(PendingJump {
                    target: id,
                    deadline_ms: None,
                });
                true
            }
            Err(err) => {
                warn!(error = %err, "cannot restore deep link");
                false
            }
        }
    }

    /// Flip the mobile overlay.
    pub fn toggle_overlay(&mut self) {
        self.state.overlay_open = !self.state.overlay_open;
        debug!(open = self.state.overlay_open, "toggled overlay");
    }

    /// Close the mobile overlay.
    pub fn close_overlay(&mut self) {
        self.state.overlay_open = false;
    }

    /// Track a viewport resize. Entering the wide layout closes the overlay.
    pub fn on_resize(&mut self, width_px: f64) -> ViewportClass {
        let class = ViewportClass::classify(width_px, self.config.breakpoint_px);
        if class != self.viewport {
            debug!(?class, width_px, "viewport class changed");
        }
        if class.is_wide() && self.state.overlay_open {
            self.close_overlay();
        }
        self.viewport = class;
        class
    }

    /// Re-derive the active section from anchor positions.
    ///
    /// No-op when scroll-spy is disabled. While an explicit jump is settling,
    /// positions that do not select its target are ignored until the target
    /// is reached or `settle_ms` has passed since the first sample. A jump
    /// that ends at the bottom of the page with its anchor still on screen
    /// counts as reached, and its target stays active until the reader
    /// scrolls away from the bottom. Returns whether the active section
    /// changed.
    pub fn sync_with_scroll(&mut self, snapshot: &ScrollSnapshot, now_ms: f64) -> bool {
        if !self.config.scroll_spy {
            return false;
        }

        let derived = nearest_section(&self.registry, snapshot, self.config.scroll_offset_px);

        if let Some(pending) = self.pending.as_mut() {
            let deadline = *pending
                .deadline_ms
                .get_or_insert(now_ms + self.config.settle_ms);
            if derived == pending.target {
                self.pending = None;
            } else if anchor_on_screen_at_bottom(snapshot, &pending.target) {
                debug!(section = %pending.target, "jump ended at the bottom of the page");
                self.held = self.pending.take().map(|jump| jump.target);
                return false;
            } else if now_ms < deadline {
                return false;
            } else {
                debug!(section = %pending.target, "jump did not settle; resuming scroll-spy");
                self.pending = None;
            }
        }

        if self
            .held
            .as_deref()
            .is_some_and(|held| anchor_on_screen_at_bottom(snapshot, held))
        {
            return false;
        }
        self.held = None;

        if derived == self.state.active_section_id {
            return false;
        }

        debug!(section = %derived, "scroll-spy moved active section");
        self.state.active_section_id = derived.to_string();
        true
    }

    /// Measure the host and re-derive the active section.
    pub fn sync_with_host<H>(&mut self, host: &H, now_ms: f64) -> bool
    where
        H: ScrollHost + ?Sized,
    {
        if !self.config.scroll_spy {
            return false;
        }
        let snapshot = host.snapshot(&self.registry);
        self.sync_with_scroll(&snapshot, now_ms)
    }

    /// Swap in a new registry, keeping the active section if it still exists.
    pub fn replace_registry(&mut self, registry: SectionRegistry) {
        if !registry.contains(&self.state.active_section_id) {
            debug!(
                stale = %self.state.active_section_id,
                "active section dropped from registry; falling back to first"
            );
            self.state.active_section_id = registry.first().id.clone();
            self.pending = None;
            self.held = None;
            self.deep_linked = false;
        }
        self.registry = registry;
    }
}

/// Whether the page is at the bottom and `id`'s anchor has not scrolled off
/// the top. At the bottom every anchor below the viewport top is visible.
fn anchor_on_screen_at_bottom(snapshot: &ScrollSnapshot, id: &str) -> bool {
    snapshot.at_bottom && snapshot.top_of(id).is_some_and(|top| top >= 0.0)
}
