//! Position resolver tests

use anchored_menu::geometry::{Rect, Size, ViewportInfo};
use anchored_menu::placement::{resolve, DEFAULT_SCREEN_INDENT};

const INDENT: f32 = DEFAULT_SCREEN_INDENT;

#[test]
fn test_flip_left_when_panel_overflows_right_edge() {
    let anchor = Rect::new(300.0, 50.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(350.0, 800.0);
    let result = resolve(anchor, Size::new(100.0, 60.0), viewport, INDENT, false);

    // 300 + 100 > 342, so the panel hangs from min(342, 300 + 40)
    assert!(result.mirror_x);
    assert_eq!(result.origin.x, 340.0);
    assert!(result.grows_left());
    assert_eq!(result.panel_rect(Size::new(100.0, 60.0)).x, 240.0);
}

#[test]
fn test_flip_hang_point_capped_by_indent() {
    // Wide anchor whose right edge passes the indent line
    let anchor = Rect::new(300.0, 50.0, 60.0, 20.0);
    let viewport = ViewportInfo::new(350.0, 800.0);
    let result = resolve(anchor, Size::new(100.0, 60.0), viewport, INDENT, false);

    assert!(result.mirror_x);
    assert_eq!(result.origin.x, 342.0);
}

#[test]
fn test_no_flip_when_panel_fits() {
    let anchor = Rect::new(10.0, 50.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(400.0, 800.0);
    let result = resolve(anchor, Size::new(50.0, 60.0), viewport, INDENT, false);

    assert!(!result.mirror_x);
    assert!(!result.mirror_y);
    assert_eq!(result.origin.x, 10.0);
    assert_eq!(result.origin.y, 50.0);
}

#[test]
fn test_clamp_to_indent() {
    let anchor = Rect::new(2.0, 3.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(400.0, 800.0);
    let result = resolve(anchor, Size::new(20.0, 20.0), viewport, INDENT, false);

    assert!(!result.mirror_x);
    assert_eq!(result.origin.x, 8.0);
    assert_eq!(result.origin.y, 8.0);
}

#[test]
fn test_flip_up_near_bottom_edge() {
    let anchor = Rect::new(100.0, 760.0, 60.0, 36.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let panel = Size::new(120.0, 160.0);
    let result = resolve(anchor, panel, viewport, INDENT, false);

    assert!(result.mirror_y);
    assert!(result.grows_up());
    assert_eq!(result.origin.y, 796.0);
    let rect = result.panel_rect(panel);
    assert_eq!(rect.y, 636.0);
    assert!(rect.bottom() <= viewport.height - INDENT);
}

#[test]
fn test_flipped_hang_point_capped_vertically() {
    let anchor = Rect::new(100.0, 780.0, 60.0, 36.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let result = resolve(anchor, Size::new(120.0, 160.0), viewport, INDENT, false);

    assert!(result.mirror_y);
    assert_eq!(result.origin.y, 804.0);
}

#[test]
fn test_zero_size_panel_never_flips() {
    let anchor = Rect::new(370.0, 810.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let result = resolve(anchor, Size::ZERO, viewport, INDENT, false);

    assert!(!result.mirror_x);
    assert!(!result.mirror_y);
    assert_eq!(result.origin.x, 370.0);
    assert_eq!(result.origin.y, 810.0);
}

#[test]
fn test_rtl_hangs_from_anchor_right_edge() {
    let anchor = Rect::new(235.0, 120.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let panel = Size::new(120.0, 150.0);
    let result = resolve(anchor, panel, viewport, INDENT, true);

    assert!(result.rtl);
    assert!(!result.mirror_x);
    assert!(result.grows_left());
    assert_eq!(result.origin.x, anchor.right());
    let rect = result.panel_rect(panel);
    assert_eq!(rect.x, 155.0);
    assert_eq!(rect.right(), 275.0);
}

#[test]
fn test_rtl_flips_toward_right_near_left_edge() {
    let anchor = Rect::new(20.0, 120.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let panel = Size::new(120.0, 150.0);
    let result = resolve(anchor, panel, viewport, INDENT, true);

    // Mirrored start is 375 - 60 = 315; 315 + 120 > 367 flips to min(367, 355)
    assert!(result.mirror_x);
    assert!(!result.grows_left());
    assert_eq!(result.origin.x, 20.0);
    assert_eq!(result.panel_rect(panel).x, 20.0);
}

#[test]
fn test_rtl_clamps_to_right_indent() {
    let anchor = Rect::new(340.0, 120.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let result = resolve(anchor, Size::new(100.0, 100.0), viewport, INDENT, true);

    // Anchor right edge (380) lies beyond the viewport; mirrored start -5 clamps to 8
    assert!(!result.mirror_x);
    assert_eq!(result.origin.x, 367.0);
}

#[test]
fn test_rtl_is_mirror_image_of_ltr() {
    let viewport = ViewportInfo::new(375.0, 812.0);
    let panel = Size::new(120.0, 160.0);
    for x in [0.0, 30.0, 150.0, 290.0, 340.0] {
        let anchor = Rect::new(x, 300.0, 40.0, 20.0);
        let mirrored = Rect::new(viewport.width - anchor.right(), 300.0, 40.0, 20.0);

        let ltr = resolve(mirrored, panel, viewport, INDENT, false).panel_rect(panel);
        let rtl = resolve(anchor, panel, viewport, INDENT, true).panel_rect(panel);

        assert_eq!(rtl.x, viewport.width - ltr.right(), "anchor x = {}", x);
        assert_eq!(rtl.y, ltr.y);
    }
}

#[test]
fn test_custom_indent() {
    let anchor = Rect::new(0.0, 0.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let result = resolve(anchor, Size::new(50.0, 50.0), viewport, 16.0, false);

    assert_eq!(result.origin.x, 16.0);
    assert_eq!(result.origin.y, 16.0);
}

#[test]
fn test_resolve_is_pure() {
    let anchor = Rect::new(300.0, 700.0, 40.0, 20.0);
    let viewport = ViewportInfo::new(375.0, 812.0);
    let panel = Size::new(120.0, 160.0);

    let first = resolve(anchor, panel, viewport, INDENT, false);
    let second = resolve(anchor, panel, viewport, INDENT, false);
    assert_eq!(first, second);
}

#[test]
fn test_viewport_from_window_excludes_status_bar() {
    let viewport = ViewportInfo::from_window(375.0, 812.0, 24.0);
    assert_eq!(viewport.width, 375.0);
    assert_eq!(viewport.height, 788.0);
}
