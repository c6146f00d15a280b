//! Message types for the Elm-style architecture
//!
//! Every input to the menu state machine, whether a caller request or a host
//! callback, is one of these messages.

use std::time::Duration;

use crate::geometry::{Rect, Size, ViewportInfo};

/// Ticket identifying one anchor measurement request
///
/// Measurements answered with an older ticket are stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureRequest(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Open the menu (caller request)
    Show,
    /// Close the menu (caller request)
    Hide,
    /// Controlled mode: drive visibility from an `open` flag
    SetOpen(bool),
    /// Host answered a measurement request; `None` when the anchor is gone
    AnchorMeasured {
        request: MeasureRequest,
        rect: Option<Rect>,
    },
    /// Host laid out the panel content at its natural size
    PanelLayout(Size),
    /// One frame of the host's animation scheduler elapsed
    Frame(Duration),
    /// Visible screen area changed (rotation, window resize)
    ViewportChanged(ViewportInfo),
    /// Outside tap or system back action on the overlay
    DismissRequested,
}
