//! Menu rows and dividers
//!
//! Plain descriptors for the panel content plus the layout that gives the
//! panel its natural size. Row geometry is always derived from an explicit
//! panel width so rows stay pure functions of their inputs.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};
use crate::theme::Color;

pub const ITEM_HEIGHT: f32 = 48.0;
pub const ITEM_MIN_WIDTH: f32 = 124.0;
pub const ITEM_MAX_WIDTH: f32 = 248.0;
pub const ITEM_PADDING_X: f32 = 16.0;
pub const ITEM_FONT_SIZE: f32 = 14.0;
pub const DIVIDER_HEIGHT: f32 = 1.0;

/// How a label that does not fit is shortened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ellipsize {
    /// Cut the text at the row edge
    Clip,
    /// Replace the end with an ellipsis
    #[default]
    Tail,
}

/// A pressable row with a single-line label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    /// Overrides the style's disabled text color
    #[serde(default)]
    pub disabled_text_color: Option<Color>,
    #[serde(default)]
    pub ellipsize: Ellipsize,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            disabled_text_color: None,
            ellipsize: Ellipsize::default(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A hairline separating groups of rows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuDivider {
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuEntry {
    Item(MenuItem),
    Divider(MenuDivider),
}

impl MenuEntry {
    pub fn item(label: impl Into<String>) -> Self {
        MenuEntry::Item(MenuItem::new(label))
    }

    pub fn divider() -> Self {
        MenuEntry::Divider(MenuDivider::default())
    }

    fn height(&self) -> f32 {
        match self {
            MenuEntry::Item(_) => ITEM_HEIGHT,
            MenuEntry::Divider(_) => DIVIDER_HEIGHT,
        }
    }
}

/// Geometry of one entry, relative to the panel's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    /// Index into the entry list
    pub index: usize,
    pub bounds: Rect,
    /// Whether the row reacts to presses
    pub pressable: bool,
}

/// Content layout helpers
pub struct ContentLayout;

impl ContentLayout {
    /// Natural panel size: widest label plus padding, clamped to the row width
    /// limits, and the stacked heights of all entries
    pub fn measure(entries: &[MenuEntry], text_width: impl Fn(&str) -> f32) -> Size {
        if entries.is_empty() {
            return Size::ZERO;
        }

        let widest = entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(item) => Some(text_width(&item.label) + ITEM_PADDING_X * 2.0),
                MenuEntry::Divider(_) => None,
            })
            .fold(0.0f32, f32::max);

        let height = entries.iter().map(MenuEntry::height).sum();
        Size::new(widest.clamp(ITEM_MIN_WIDTH, ITEM_MAX_WIDTH), height)
    }

    /// Stack entries top to bottom across the full `width`
    pub fn rows(entries: &[MenuEntry], width: f32) -> Vec<RowLayout> {
        let mut y = 0.0;
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let height = entry.height();
                let row = RowLayout {
                    index,
                    bounds: Rect::new(0.0, y, width, height),
                    pressable: matches!(entry, MenuEntry::Item(item) if !item.disabled),
                };
                y += height;
                row
            })
            .collect()
    }

    /// Entry index under `point` (panel-relative); dividers and disabled rows never hit
    pub fn hit_test(rows: &[RowLayout], point: Point) -> Option<usize> {
        rows.iter()
            .find(|row| row.bounds.contains(point.x, point.y))
            .filter(|row| row.pressable)
            .map(|row| row.index)
    }
}
