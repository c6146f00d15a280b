//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anchored_menu::commands::Cmd;
use anchored_menu::config::MenuConfig;
use anchored_menu::geometry::{Rect, Size, ViewportInfo};
use anchored_menu::menu::{Menu, MenuHost};
use anchored_menu::messages::{MeasureRequest, Msg};
use anchored_menu::model::MenuModel;
use anchored_menu::update::{update, Transition};

/// Phone-sized viewport used across the state machine tests
pub const PHONE: ViewportInfo = ViewportInfo::new(375.0, 812.0);

pub const ANCHOR: Rect = Rect::new(100.0, 200.0, 40.0, 20.0);

pub const PANEL: Size = Size::new(120.0, 160.0);

pub const FRAME: Duration = Duration::from_millis(16);

/// Model with zero-duration animations so every transition settles synchronously
pub fn instant_model() -> MenuModel {
    MenuModel::new(MenuConfig::instant(), PHONE, false)
}

/// Model animating over `duration_ms` with linear easing
pub fn timed_model(duration_ms: u64) -> MenuModel {
    let mut config = MenuConfig::default().with_duration_ms(duration_ms);
    config.easing = anchored_menu::animation::Easing::Linear;
    MenuModel::new(config, PHONE, false)
}

/// The measurement ticket carried by a command, if any
pub fn measure_request(cmd: &Option<Cmd>) -> Option<MeasureRequest> {
    cmd.clone()?.flatten().into_iter().find_map(|c| match c {
        Cmd::MeasureAnchor { request } => Some(request),
        _ => None,
    })
}

/// Drive `show` through measurement and layout, returning the last update result
pub fn open(model: &mut MenuModel, anchor: Rect, panel: Size) -> (Transition, Option<Cmd>) {
    let (transition, cmd) = update(model, Msg::Show);
    assert_eq!(transition, Transition::Accepted);
    let request = measure_request(&cmd).expect("show should request a measurement");

    let (transition, _) = update(
        model,
        Msg::AnchorMeasured {
            request,
            rect: Some(anchor),
        },
    );
    assert_eq!(transition, Transition::Accepted);

    update(model, Msg::PanelLayout(panel))
}

/// Feed frames until the model stops animating (bounded)
pub fn run_frames(model: &mut MenuModel, dt: Duration, max_frames: usize) -> usize {
    for n in 0..max_frames {
        if !model.phase().is_animating() {
            return n;
        }
        update(model, Msg::Frame(dt));
    }
    max_frames
}

/// Host call recorded by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Measure(MeasureRequest),
    Overlay(bool),
    Frame,
    Redraw,
}

/// Host that records every call for later assertions
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub calls: Rc<RefCell<Vec<HostCall>>>,
}

impl RecordingHost {
    pub fn last_measure(&self) -> Option<MeasureRequest> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            HostCall::Measure(r) => Some(*r),
            _ => None,
        })
    }

    pub fn overlay_visible(&self) -> bool {
        self.calls
            .borrow()
            .iter()
            .rev()
            .find_map(|c| match c {
                HostCall::Overlay(v) => Some(*v),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }
}

impl MenuHost for RecordingHost {
    fn measure_anchor(&mut self, request: MeasureRequest) {
        self.calls.borrow_mut().push(HostCall::Measure(request));
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.calls.borrow_mut().push(HostCall::Overlay(visible));
    }

    fn request_frame(&mut self) {
        self.calls.borrow_mut().push(HostCall::Frame);
    }

    fn request_redraw(&mut self) {
        self.calls.borrow_mut().push(HostCall::Redraw);
    }
}

/// Menu bound to a recording host
pub fn test_menu(config: MenuConfig) -> Menu<RecordingHost> {
    Menu::new(config, PHONE, false, RecordingHost::default())
}

/// Open a facade-driven menu, answering the host requests inline
pub fn open_menu(menu: &mut Menu<RecordingHost>) {
    assert!(menu.show().is_accepted());
    let request = menu.host().last_measure().expect("measurement requested");
    assert!(menu.anchor_measured(request, Some(ANCHOR)).is_accepted());
    assert!(menu.panel_layout(PANEL).is_accepted());
}

/// Shared event log for callback ordering assertions
pub fn event_log() -> Rc<RefCell<Vec<String>>> {
    Rc::new(RefCell::new(Vec::new()))
}
