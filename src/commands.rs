//! Command types for the Elm-style architecture
//!
//! Commands represent host effects that should be performed after an update.

use crate::messages::MeasureRequest;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the overlay
    Redraw,
    /// Measure the anchor in screen coordinates, then send
    /// `Msg::AnchorMeasured` with the same ticket
    MeasureAnchor { request: MeasureRequest },
    /// Show or remove the overlay layer
    SetOverlayVisible(bool),
    /// Keep delivering `Msg::Frame` until the animations settle
    RequestFrame,
    /// The menu finished hiding; run the hidden callbacks
    NotifyHidden,
    /// The overlay asked to be closed (outside tap / back action)
    RequestClose,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::MeasureAnchor { .. } => false,
            Cmd::SetOverlayVisible(_) => true,
            Cmd::RequestFrame => true,
            Cmd::NotifyHidden => false,
            Cmd::RequestClose => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a list of leaf commands, in order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// True if this command (or any command in a batch) matches `pred`
    pub fn contains(&self, pred: impl Fn(&Cmd) -> bool + Copy) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.contains(pred)),
            other => pred(other),
        }
    }
}
