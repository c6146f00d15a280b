//! Menu model - the complete state of one menu instance
//!
//! Owned exclusively by a single menu and only touched from the UI thread.

pub mod phase;

pub use phase::{Phase, VisibilityState};

use crate::animation::{AnimatedScalar, AnimatedSize};
use crate::config::MenuConfig;
use crate::geometry::{Rect, Size, ViewportInfo};
use crate::messages::MeasureRequest;
use crate::placement::{resolve, PlacementResult};

/// State of one anchored menu
#[derive(Debug, Clone)]
pub struct MenuModel {
    /// Construction options
    pub config: MenuConfig,
    /// Effective text direction
    pub rtl: bool,
    /// Visible screen area
    pub viewport: ViewportInfo,
    pub(crate) phase: Phase,
    /// Anchor rect recorded by the last successful measurement
    pub(crate) anchor: Option<Rect>,
    /// Natural panel size from the layout report of this cycle
    pub(crate) panel_size: Size,
    pub(crate) placement: PlacementResult,
    pub(crate) size: AnimatedSize,
    pub(crate) opacity: AnimatedScalar,
    next_request: u64,
}

impl MenuModel {
    pub fn new(config: MenuConfig, viewport: ViewportInfo, host_rtl: bool) -> Self {
        let rtl = config.resolve_rtl(host_rtl);
        Self {
            config,
            rtl,
            viewport,
            phase: Phase::Hidden,
            anchor: None,
            panel_size: Size::ZERO,
            placement: PlacementResult::default(),
            size: AnimatedSize::default(),
            opacity: AnimatedScalar::new(0.0),
            next_request: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visibility(&self) -> VisibilityState {
        self.phase.visibility()
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.phase.overlay_visible()
    }

    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Natural size reported by the host for the current cycle
    pub fn panel_size(&self) -> Size {
        self.panel_size
    }

    pub fn placement(&self) -> PlacementResult {
        self.placement
    }

    /// Current (possibly mid-animation) panel size
    pub fn animated_size(&self) -> Size {
        self.size.value()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Screen rect the panel occupies at its current animated size
    pub fn panel_rect(&self) -> Rect {
        self.placement.panel_rect(self.size.value())
    }

    /// Label used in log output for this instance
    pub fn label(&self) -> &str {
        self.config.test_id.as_deref().unwrap_or("menu")
    }

    pub(crate) fn next_measure_request(&mut self) -> MeasureRequest {
        self.next_request += 1;
        MeasureRequest(self.next_request)
    }

    /// Re-run the resolver against the recorded anchor and panel size
    pub(crate) fn resolve_placement(&mut self) {
        if let Some(anchor) = self.anchor {
            self.placement = resolve(
                anchor,
                self.panel_size,
                self.viewport,
                self.config.screen_indent,
                self.rtl,
            );
        }
    }

    /// Return animated values to their zero targets, reusing the same instances
    pub(crate) fn reset_values(&mut self) {
        self.size.set(Size::ZERO);
        self.opacity.set(0.0);
    }
}
