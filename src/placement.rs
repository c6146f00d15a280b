//! Panel placement relative to an anchor
//!
//! Computes where the menu panel hangs from and in which directions it grows
//! so that it stays inside the viewport. The resolver is pure: every call is
//! independently reproducible from its inputs.

use serde::Serialize;

use crate::geometry::{Point, Rect, Size, ViewportInfo};

/// Margin kept between the panel and every viewport edge
pub const DEFAULT_SCREEN_INDENT: f32 = 8.0;

/// Output of [`resolve`]
///
/// `origin` is the hang point of the panel. Without mirroring the panel grows
/// rightward and downward from it (leftward in RTL). `mirror_x` reverses the
/// horizontal growth and `mirror_y` makes the panel grow upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlacementResult {
    pub origin: Point,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub rtl: bool,
}

impl PlacementResult {
    /// Whether the panel extends to the left of its hang point
    pub fn grows_left(&self) -> bool {
        self.rtl != self.mirror_x
    }

    pub fn grows_up(&self) -> bool {
        self.mirror_y
    }

    /// Rectangle occupied by a panel of `size` hanging from this placement
    ///
    /// `size` is usually the animated size, so the rectangle shrinks toward
    /// the hang point while the panel grows in or fades out.
    pub fn panel_rect(&self, size: Size) -> Rect {
        let x = if self.grows_left() {
            self.origin.x - size.width
        } else {
            self.origin.x
        };
        let y = if self.grows_up() {
            self.origin.y - size.height
        } else {
            self.origin.y
        };
        Rect::new(x, y, size.width, size.height)
    }
}

/// Resolve the panel placement for an anchor
///
/// A zero-sized panel never collides, so before the first layout report the
/// panel sits at the (clamped) anchor origin.
pub fn resolve(
    anchor: Rect,
    panel: Size,
    viewport: ViewportInfo,
    indent: f32,
    rtl: bool,
) -> PlacementResult {
    // RTL is the LTR rule applied in horizontally reflected space
    let anchor_x = if rtl {
        viewport.width - anchor.right()
    } else {
        anchor.x
    };

    let (x, mirror_x) = resolve_axis(anchor_x, anchor.width, panel.width, viewport.width, indent);
    let (y, mirror_y) = resolve_axis(
        anchor.y,
        anchor.height,
        panel.height,
        viewport.height,
        indent,
    );

    let x = if rtl { viewport.width - x } else { x };

    PlacementResult {
        origin: Point::new(x, y),
        mirror_x,
        mirror_y,
        rtl,
    }
}

/// Collision test along one axis: returns the hang coordinate and whether
/// growth along this axis is reversed
fn resolve_axis(
    start: f32,
    anchor_extent: f32,
    panel_extent: f32,
    limit: f32,
    indent: f32,
) -> (f32, bool) {
    let far_edge = limit - indent;
    if panel_extent > 0.0 && start + panel_extent > far_edge {
        (far_edge.min(start + anchor_extent), true)
    } else if start < indent {
        (indent, false)
    } else {
        (start, false)
    }
}
