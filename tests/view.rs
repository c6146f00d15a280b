//! Software rendering tests for the menu overlay

mod common;

use std::time::Duration;

use anchored_menu::content::MenuEntry;
use anchored_menu::messages::Msg;
use anchored_menu::model::MenuModel;
use anchored_menu::theme::MenuStyle;
use anchored_menu::update::update;
use anchored_menu::view::{render_menu, Frame, TextPainter};
use common::{instant_model, open, timed_model, ANCHOR, PANEL};

const WIDTH: usize = 375;
const HEIGHT: usize = 812;
const WHITE: u32 = 0xFFFFFFFF;

fn entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::item("Undo"),
        MenuEntry::item("Redo"),
        MenuEntry::divider(),
        MenuEntry::item("Paste"),
    ]
}

/// Render `model` over the window background, returning the pixel buffer
fn render(model: &MenuModel) -> Vec<u32> {
    let style = MenuStyle::default();
    let mut text = TextPainter::placeholder(14.0);
    let mut buffer = vec![0u32; WIDTH * HEIGHT];
    {
        let mut frame = Frame::new(&mut buffer, WIDTH, HEIGHT);
        frame.clear(style.window_background.to_argb_u32());
        render_menu(&mut frame, model, &entries(), &style, &mut text, None);
    }
    buffer
}

fn pixel(buffer: &[u32], x: usize, y: usize) -> u32 {
    buffer[y * WIDTH + x]
}

fn background() -> u32 {
    MenuStyle::default().window_background.to_argb_u32()
}

#[test]
fn test_hidden_menu_draws_nothing() {
    let model = instant_model();
    let buffer = render(&model);
    assert!(buffer.iter().all(|&p| p == background()));
}

#[test]
fn test_awaiting_layout_draws_nothing() {
    let mut model = instant_model();
    let (_, cmd) = update(&mut model, Msg::Show);
    let request = common::measure_request(&cmd).unwrap();
    update(
        &mut model,
        Msg::AnchorMeasured {
            request,
            rect: Some(ANCHOR),
        },
    );
    assert!(model.is_overlay_visible());

    let buffer = render(&model);
    assert!(buffer.iter().all(|&p| p == background()));
}

#[test]
fn test_shown_menu_fills_panel() {
    let mut model = instant_model();
    open(&mut model, ANCHOR, PANEL);
    let buffer = render(&model);

    // Inside the left padding of the first row
    assert_eq!(pixel(&buffer, 104, 224), WHITE);
    // Divider row sits below two items
    let divider = pixel(&buffer, 110, 296);
    assert_ne!(divider, WHITE);
    assert_ne!(divider, background());
    // Well away from the panel and its shadow
    assert_eq!(pixel(&buffer, 50, 100), background());
    assert_eq!(pixel(&buffer, 300, 500), background());
}

#[test]
fn test_growing_menu_is_clipped_and_translucent() {
    let mut model = timed_model(300);
    open(&mut model, ANCHOR, PANEL);
    update(&mut model, Msg::Frame(Duration::from_millis(150)));
    let buffer = render(&model);

    let inside = pixel(&buffer, 104, 224);
    assert_ne!(inside, WHITE);
    assert_ne!(inside, background());
    // Beyond the half-grown width
    assert_eq!(pixel(&buffer, 170, 210), background());
}
