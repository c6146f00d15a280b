//! Callback-style facade over the menu state machine
//!
//! [`Menu`] feeds caller requests and host callbacks through
//! [`update`](crate::update::update) and performs the resulting commands
//! against a [`MenuHost`].

use std::time::Duration;

use crate::commands::Cmd;
use crate::config::MenuConfig;
use crate::geometry::{Rect, Size, ViewportInfo};
use crate::messages::{MeasureRequest, Msg};
use crate::model::{MenuModel, VisibilityState};
use crate::update::{update, Transition};

/// Capabilities the host UI framework provides to a menu
pub trait MenuHost {
    /// Measure the anchor in screen coordinates and later answer with
    /// [`Menu::anchor_measured`] using the same ticket
    fn measure_anchor(&mut self, request: MeasureRequest);

    /// Show or remove the overlay layer that renders the panel above everything else
    fn set_overlay_visible(&mut self, visible: bool);

    /// Keep calling [`Menu::frame`] with elapsed time until no longer requested
    fn request_frame(&mut self);

    fn request_redraw(&mut self) {}
}

type HiddenCallback = Box<dyn FnOnce()>;
type Listener = Box<dyn FnMut()>;

/// An anchored popup menu bound to a host
pub struct Menu<H: MenuHost> {
    model: MenuModel,
    host: H,
    /// Per-call callback of the hide currently in flight
    pending_on_hidden: Option<HiddenCallback>,
    on_hidden: Option<Listener>,
    on_request_close: Option<Listener>,
}

impl<H: MenuHost> Menu<H> {
    pub fn new(config: MenuConfig, viewport: ViewportInfo, host_rtl: bool, host: H) -> Self {
        Self {
            model: MenuModel::new(config, viewport, host_rtl),
            host,
            pending_on_hidden: None,
            on_hidden: None,
            on_request_close: None,
        }
    }

    /// Component-level notification, fired after every completed hide
    pub fn on_hidden(mut self, listener: impl FnMut() + 'static) -> Self {
        self.on_hidden = Some(Box::new(listener));
        self
    }

    /// Receives outside taps and back actions; without it the menu hides itself
    pub fn on_request_close(mut self, listener: impl FnMut() + 'static) -> Self {
        self.on_request_close = Some(Box::new(listener));
        self
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn visibility(&self) -> VisibilityState {
        self.model.visibility()
    }

    pub fn show(&mut self) -> Transition {
        self.dispatch(Msg::Show)
    }

    /// Start hiding; `on_hidden` runs once the fade-out completes
    ///
    /// When the request is ignored the callback is dropped without running.
    pub fn hide(&mut self, on_hidden: Option<HiddenCallback>) -> Transition {
        self.hide_with(Msg::Hide, on_hidden)
    }

    /// Controlled mode: follow an externally owned `open` flag
    pub fn set_open(&mut self, open: bool) -> Transition {
        if open {
            self.dispatch(Msg::SetOpen(true))
        } else {
            self.hide_with(Msg::SetOpen(false), None)
        }
    }

    pub fn anchor_measured(&mut self, request: MeasureRequest, rect: Option<Rect>) -> Transition {
        self.dispatch(Msg::AnchorMeasured { request, rect })
    }

    pub fn panel_layout(&mut self, size: Size) -> Transition {
        self.dispatch(Msg::PanelLayout(size))
    }

    pub fn frame(&mut self, dt: Duration) -> Transition {
        self.dispatch(Msg::Frame(dt))
    }

    pub fn set_viewport(&mut self, viewport: ViewportInfo) -> Transition {
        self.dispatch(Msg::ViewportChanged(viewport))
    }

    pub fn dismiss_requested(&mut self) -> Transition {
        self.dispatch(Msg::DismissRequested)
    }

    fn hide_with(&mut self, msg: Msg, on_hidden: Option<HiddenCallback>) -> Transition {
        let (transition, cmd) = update(&mut self.model, msg);
        if transition.is_accepted() {
            self.pending_on_hidden = on_hidden;
        }
        if let Some(cmd) = cmd {
            self.execute(cmd);
        }
        transition
    }

    fn dispatch(&mut self, msg: Msg) -> Transition {
        let (transition, cmd) = update(&mut self.model, msg);
        if let Some(cmd) = cmd {
            self.execute(cmd);
        }
        transition
    }

    fn execute(&mut self, cmd: Cmd) {
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::Redraw => self.host.request_redraw(),
                Cmd::MeasureAnchor { request } => self.host.measure_anchor(request),
                Cmd::SetOverlayVisible(visible) => self.host.set_overlay_visible(visible),
                Cmd::RequestFrame => self.host.request_frame(),
                Cmd::NotifyHidden => {
                    if let Some(callback) = self.pending_on_hidden.take() {
                        callback();
                    }
                    if let Some(listener) = self.on_hidden.as_mut() {
                        listener();
                    }
                }
                Cmd::RequestClose => match self.on_request_close.as_mut() {
                    Some(listener) => listener(),
                    None => {
                        self.hide(None);
                    }
                },
            }
        }
    }
}
