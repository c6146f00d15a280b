//! Lifecycle phases of one menu instance

use serde::Serialize;

use crate::messages::MeasureRequest;

/// Externally observable visibility of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    #[default]
    Hidden,
    /// Between a show request and the end of the grow animation
    Measuring,
    /// Overlay on screen (including while fading out)
    Shown,
}

/// Detailed lifecycle phase driving the state machine
///
/// Hidden → MeasuringAnchor → AwaitingLayout → Growing → Shown → Hiding → Hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    /// Anchor measurement requested, overlay not yet visible
    MeasuringAnchor { request: MeasureRequest },
    /// Overlay visible at zero size, waiting for the panel's natural size
    AwaitingLayout,
    /// Size and opacity animating toward the measured panel
    Growing,
    Shown,
    /// Opacity animating toward zero
    Hiding,
}

impl Phase {
    pub fn visibility(self) -> VisibilityState {
        match self {
            Phase::Hidden => VisibilityState::Hidden,
            Phase::MeasuringAnchor { .. } | Phase::AwaitingLayout | Phase::Growing => {
                VisibilityState::Measuring
            }
            Phase::Shown | Phase::Hiding => VisibilityState::Shown,
        }
    }

    /// Whether the host should currently render the overlay layer
    pub fn overlay_visible(self) -> bool {
        matches!(
            self,
            Phase::AwaitingLayout | Phase::Growing | Phase::Shown | Phase::Hiding
        )
    }

    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Growing | Phase::Hiding)
    }
}
