//! Update function for the Elm-style architecture
//!
//! All menu state transitions flow through [`update`]. Requests that would
//! overlap an in-flight transition are rejected deterministically and
//! reported through [`Transition::Ignored`]; they never mutate the model.

use std::time::Duration;

use crate::commands::Cmd;
use crate::geometry::{Rect, Size, ViewportInfo};
use crate::messages::{MeasureRequest, Msg};
use crate::model::{MenuModel, Phase};
use crate::placement::PlacementResult;

/// Whether a message changed the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Accepted,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_accepted(self) -> bool {
        matches!(self, Transition::Accepted)
    }
}

/// Why a message was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Show requested while the menu is already opening or open
    AlreadyVisible,
    /// Hide or dismiss requested while the menu is hidden
    AlreadyHidden,
    /// The menu is fading out; new show/hide requests are rejected until it settles
    Transitioning,
    /// Measurement answered an outdated request
    StaleMeasurement,
    /// Layout report outside the window where the panel size is awaited
    NotAwaitingLayout,
    /// Layout report without any extent
    EmptyLayout,
}

/// Main update function - dispatches to the per-message handlers
pub fn update(model: &mut MenuModel, msg: Msg) -> (Transition, Option<Cmd>) {
    let label = model.label().to_owned();
    let _span = tracing::debug_span!("menu", id = %label).entered();
    let before = model.phase;

    let result = match msg {
        Msg::Show => show(model),
        Msg::Hide => hide(model),
        Msg::SetOpen(true) => show(model),
        Msg::SetOpen(false) => hide(model),
        Msg::AnchorMeasured { request, rect } => anchor_measured(model, request, rect),
        Msg::PanelLayout(size) => panel_layout(model, size),
        Msg::Frame(dt) => (Transition::Accepted, advance(model, dt)),
        Msg::ViewportChanged(viewport) => viewport_changed(model, viewport),
        Msg::DismissRequested => dismiss(model),
    };

    if model.phase != before {
        tracing::debug!("phase {:?} -> {:?}", before, model.phase);
    }
    if let Transition::Ignored(reason) = result.0 {
        tracing::debug!(?reason, "request ignored in {:?}", model.phase);
    }

    result
}

fn ignored(reason: IgnoreReason) -> (Transition, Option<Cmd>) {
    (Transition::Ignored(reason), None)
}

fn show(model: &mut MenuModel) -> (Transition, Option<Cmd>) {
    match model.phase {
        Phase::Hidden => {
            let request = model.next_measure_request();
            model.phase = Phase::MeasuringAnchor { request };
            (Transition::Accepted, Some(Cmd::MeasureAnchor { request }))
        }
        Phase::Hiding => ignored(IgnoreReason::Transitioning),
        Phase::MeasuringAnchor { .. } | Phase::AwaitingLayout | Phase::Growing | Phase::Shown => {
            ignored(IgnoreReason::AlreadyVisible)
        }
    }
}

fn hide(model: &mut MenuModel) -> (Transition, Option<Cmd>) {
    match model.phase {
        Phase::Hidden => ignored(IgnoreReason::AlreadyHidden),
        Phase::Hiding => ignored(IgnoreReason::Transitioning),
        Phase::MeasuringAnchor { .. } => {
            // Overlay never appeared; the pending measurement turns stale
            finish_hide(model);
            (Transition::Accepted, Some(Cmd::NotifyHidden))
        }
        Phase::AwaitingLayout | Phase::Growing | Phase::Shown => {
            model.phase = Phase::Hiding;
            let duration = model.config.animation_duration();
            // Layered over any in-flight grow; opacity alone gates visibility
            model.opacity.animate_to(0.0, duration, model.config.easing);
            (Transition::Accepted, advance(model, Duration::ZERO))
        }
    }
}

fn anchor_measured(
    model: &mut MenuModel,
    request: MeasureRequest,
    rect: Option<Rect>,
) -> (Transition, Option<Cmd>) {
    match model.phase {
        Phase::MeasuringAnchor { request: pending } if pending == request => {}
        _ => return ignored(IgnoreReason::StaleMeasurement),
    }

    let Some(rect) = rect else {
        tracing::debug!("anchor could not be measured, menu stays hidden");
        finish_hide(model);
        return (Transition::Accepted, None);
    };

    model.anchor = Some(rect);
    model.panel_size = Size::ZERO;
    model.reset_values();
    model.resolve_placement();
    model.phase = Phase::AwaitingLayout;

    (
        Transition::Accepted,
        Some(Cmd::batch(vec![Cmd::SetOverlayVisible(true), Cmd::Redraw])),
    )
}

fn panel_layout(model: &mut MenuModel, size: Size) -> (Transition, Option<Cmd>) {
    if model.phase != Phase::AwaitingLayout {
        return ignored(IgnoreReason::NotAwaitingLayout);
    }
    if size.is_empty() {
        return ignored(IgnoreReason::EmptyLayout);
    }

    model.panel_size = size;
    model.resolve_placement();
    model.phase = Phase::Growing;
    tracing::debug!(
        "panel {}x{} placed at ({}, {}) mirror_x={} mirror_y={}",
        size.width,
        size.height,
        model.placement.origin.x,
        model.placement.origin.y,
        model.placement.mirror_x,
        model.placement.mirror_y
    );

    let duration = model.config.animation_duration();
    let easing = model.config.easing;
    model.size.animate_to(size, duration, easing);
    model.opacity.animate_to(1.0, duration, easing);

    (Transition::Accepted, advance(model, Duration::ZERO))
}

/// Step the animations and settle the phase once they complete
fn advance(model: &mut MenuModel, dt: Duration) -> Option<Cmd> {
    match model.phase {
        Phase::Growing => {
            model.opacity.tick(dt);
            model.size.tick(dt);
            if model.opacity.is_animating() || model.size.is_animating() {
                Some(Cmd::batch(vec![Cmd::Redraw, Cmd::RequestFrame]))
            } else {
                model.phase = Phase::Shown;
                Some(Cmd::Redraw)
            }
        }
        Phase::Hiding => {
            model.opacity.tick(dt);
            model.size.tick(dt);
            if model.opacity.is_animating() {
                Some(Cmd::batch(vec![Cmd::Redraw, Cmd::RequestFrame]))
            } else {
                finish_hide(model);
                Some(Cmd::batch(vec![
                    Cmd::SetOverlayVisible(false),
                    Cmd::NotifyHidden,
                ]))
            }
        }
        _ => None,
    }
}

/// Reset the per-cycle state and land in `Hidden`
fn finish_hide(model: &mut MenuModel) {
    model.reset_values();
    model.anchor = None;
    model.panel_size = Size::ZERO;
    model.placement = PlacementResult::default();
    model.phase = Phase::Hidden;
}

fn viewport_changed(model: &mut MenuModel, viewport: ViewportInfo) -> (Transition, Option<Cmd>) {
    model.viewport = viewport;
    if model.phase.overlay_visible() {
        model.resolve_placement();
        (Transition::Accepted, Some(Cmd::Redraw))
    } else {
        (Transition::Accepted, None)
    }
}

fn dismiss(model: &mut MenuModel) -> (Transition, Option<Cmd>) {
    if model.phase.overlay_visible() {
        (Transition::Accepted, Some(Cmd::RequestClose))
    } else {
        ignored(IgnoreReason::AlreadyHidden)
    }
}
