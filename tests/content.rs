//! Menu content layout tests

use anchored_menu::content::{
    ContentLayout, MenuEntry, MenuItem, DIVIDER_HEIGHT, ITEM_HEIGHT, ITEM_MAX_WIDTH,
    ITEM_MIN_WIDTH, ITEM_PADDING_X,
};
use anchored_menu::geometry::{Point, Size};

/// Fixed-advance measurement: 10 units per character
fn ten_per_char(label: &str) -> f32 {
    label.chars().count() as f32 * 10.0
}

fn sample_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::item("Undo"),
        MenuEntry::item("Redo"),
        MenuEntry::divider(),
        MenuEntry::Item(MenuItem::new("Paste").disabled()),
    ]
}

#[test]
fn test_measure_empty_is_zero() {
    assert_eq!(ContentLayout::measure(&[], ten_per_char), Size::ZERO);
}

#[test]
fn test_measure_uses_min_width_for_short_labels() {
    let size = ContentLayout::measure(&sample_entries(), ten_per_char);
    assert_eq!(size.width, ITEM_MIN_WIDTH);
    assert_eq!(size.height, ITEM_HEIGHT * 3.0 + DIVIDER_HEIGHT);
}

#[test]
fn test_measure_grows_with_label() {
    let entries = vec![MenuEntry::item("Fifteen chars!!")];
    let size = ContentLayout::measure(&entries, ten_per_char);
    assert_eq!(size.width, 150.0 + ITEM_PADDING_X * 2.0);
}

#[test]
fn test_measure_caps_at_max_width() {
    let entries = vec![MenuEntry::item("x".repeat(100))];
    let size = ContentLayout::measure(&entries, ten_per_char);
    assert_eq!(size.width, ITEM_MAX_WIDTH);
}

#[test]
fn test_dividers_only_panel_has_min_width() {
    let entries = vec![MenuEntry::divider()];
    let size = ContentLayout::measure(&entries, ten_per_char);
    assert_eq!(size, Size::new(ITEM_MIN_WIDTH, DIVIDER_HEIGHT));
}

#[test]
fn test_rows_stack_at_explicit_width() {
    let rows = ContentLayout::rows(&sample_entries(), 200.0);

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.bounds.width == 200.0));
    assert_eq!(rows[1].bounds.y, ITEM_HEIGHT);
    assert_eq!(rows[2].bounds.height, DIVIDER_HEIGHT);
    assert_eq!(rows[3].bounds.y, ITEM_HEIGHT * 2.0 + DIVIDER_HEIGHT);
    assert!(rows[0].pressable);
    assert!(!rows[2].pressable);
    assert!(!rows[3].pressable);
}

#[test]
fn test_hit_test_finds_pressable_rows_only() {
    let rows = ContentLayout::rows(&sample_entries(), 200.0);

    assert_eq!(ContentLayout::hit_test(&rows, Point::new(10.0, 10.0)), Some(0));
    assert_eq!(ContentLayout::hit_test(&rows, Point::new(10.0, 60.0)), Some(1));
    // Divider
    assert_eq!(
        ContentLayout::hit_test(&rows, Point::new(10.0, ITEM_HEIGHT * 2.0 + 0.5)),
        None
    );
    // Disabled row
    assert_eq!(ContentLayout::hit_test(&rows, Point::new(10.0, 120.0)), None);
    // Outside the panel
    assert_eq!(ContentLayout::hit_test(&rows, Point::new(250.0, 10.0)), None);
    assert_eq!(ContentLayout::hit_test(&rows, Point::new(10.0, -1.0)), None);
}

#[test]
fn test_entries_from_yaml() {
    let yaml = r##"
- item: { label: Open }
- divider: {}
- item: { label: Delete, disabled: true, disabled_text_color: "#FF000080", ellipsize: clip }
- divider: { color: "#00000033" }
"##;
    let entries: Vec<MenuEntry> = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], MenuEntry::item("Open"));
    match &entries[2] {
        MenuEntry::Item(item) => {
            assert!(item.disabled);
            assert_eq!(item.disabled_text_color.unwrap().a, 0x80);
            assert_eq!(item.ellipsize, anchored_menu::content::Ellipsize::Clip);
        }
        other => panic!("expected item, got {:?}", other),
    }
    match &entries[3] {
        MenuEntry::Divider(divider) => assert_eq!(divider.color.unwrap().a, 0x33),
        other => panic!("expected divider, got {:?}", other),
    }
}
