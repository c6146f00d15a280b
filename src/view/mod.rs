//! Software rendering of the anchor button and the menu overlay

pub mod frame;

pub use frame::{blend_colors, Frame, GlyphCache, TextPainter};

use crate::content::{ContentLayout, Ellipsize, MenuEntry, ITEM_HEIGHT, ITEM_PADDING_X};
use crate::geometry::Rect;
use crate::model::MenuModel;
use crate::theme::{Color, MenuStyle};

/// Draw the panel at its current animated size, placement and opacity
///
/// Content is laid out at the panel's natural width and clipped to the
/// animated rectangle, so rows are revealed as the panel grows.
pub fn render_menu(
    frame: &mut Frame,
    model: &MenuModel,
    entries: &[MenuEntry],
    style: &MenuStyle,
    text: &mut TextPainter,
    highlighted: Option<usize>,
) {
    let opacity = model.opacity();
    if !model.is_overlay_visible() || opacity <= 0.0 {
        return;
    }

    let panel = model.panel_rect();
    if panel.width < 1.0 || panel.height < 1.0 {
        return;
    }

    draw_shadow(frame, panel, style, opacity);
    frame.fill_rounded_rect_blended(
        panel,
        style.corner_radius,
        style.background.faded(opacity).to_argb_u32(),
    );

    let natural = model.panel_size();
    frame.set_clip(panel);
    for row in ContentLayout::rows(entries, natural.width) {
        let bounds = Rect::new(
            panel.x + row.bounds.x,
            panel.y + row.bounds.y,
            row.bounds.width,
            row.bounds.height,
        );
        match &entries[row.index] {
            MenuEntry::Item(item) => {
                if highlighted == Some(row.index) && row.pressable {
                    let hover = Color::rgba(0, 0, 0, 0x14).faded(opacity);
                    frame.fill_rect_blended(bounds, hover.to_argb_u32());
                }
                let color = if item.disabled {
                    item.disabled_text_color.unwrap_or(style.disabled_text)
                } else {
                    style.text
                };
                let max_width = bounds.width - ITEM_PADDING_X * 2.0;
                let label = text.fit(&item.label, max_width, item.ellipsize == Ellipsize::Tail);
                let y = bounds.y + (ITEM_HEIGHT - text.line_height()) / 2.0;
                text.draw(
                    frame,
                    bounds.x + ITEM_PADDING_X,
                    y,
                    &label,
                    color.faded(opacity).to_argb_u32(),
                );
            }
            MenuEntry::Divider(divider) => {
                let color = divider.color.unwrap_or(style.divider).faded(opacity);
                frame.fill_rect_blended(bounds, color.to_argb_u32());
            }
        }
    }
    frame.clear_clip();
}

/// Soft drop shadow: stacked translucent rectangles below the panel
fn draw_shadow(frame: &mut Frame, panel: Rect, style: &MenuStyle, opacity: f32) {
    let layers = style.elevation.round().max(0.0) as usize;
    for layer in (1..=layers).rev() {
        let spread = layer as f32 * 0.5;
        let rect = Rect::new(
            panel.x - spread,
            panel.y - spread + layer as f32 * 0.5,
            panel.width + spread * 2.0,
            panel.height + spread * 2.0,
        );
        let alpha = (0.05 * opacity / layer as f32 * 4.0).min(0.1);
        let color = Color::rgba(0, 0, 0, (alpha * 255.0) as u8);
        frame.fill_rounded_rect_blended(rect, style.corner_radius + spread, color.to_argb_u32());
    }
}

/// Draw the anchor button the menu opens from
pub fn render_anchor_button(
    frame: &mut Frame,
    rect: Rect,
    label: &str,
    style: &MenuStyle,
    text: &mut TextPainter,
) {
    frame.fill_rounded_rect_blended(rect, style.corner_radius, style.text.to_argb_u32());
    let x = rect.x + (rect.width - text.measure_width(label)) / 2.0;
    let y = rect.y + (rect.height - text.line_height()) / 2.0;
    text.draw(frame, x, y, label, style.background.to_argb_u32());
}
