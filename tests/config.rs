//! Configuration system tests

use std::time::Duration;

use anchored_menu::animation::Easing;
use anchored_menu::config::MenuConfig;
use anchored_menu::config_paths;
use anchored_menu::theme::Color;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("anchored-menu"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Menu Config Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = MenuConfig::default();
    assert_eq!(config.animation_duration(), Duration::from_millis(300));
    assert_eq!(config.screen_indent, 8.0);
    assert_eq!(config.easing, Easing::Standard);
    assert_eq!(config.rtl, None);
}

#[test]
fn test_instant_config() {
    let config = MenuConfig::instant();
    assert_eq!(config.animation_duration(), Duration::ZERO);
    assert_eq!(config.easing, Easing::Linear);
}

#[test]
fn test_rtl_falls_back_to_host() {
    let config = MenuConfig::default();
    assert!(config.resolve_rtl(true));
    assert!(!config.resolve_rtl(false));

    let forced = MenuConfig::default().with_rtl(false);
    assert!(!forced.resolve_rtl(true));
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let yaml = r##"
animation_duration_ms: 150
easing:
  cubic_bezier: { x1: 0.0, y1: 0.0, x2: 0.58, y2: 1.0 }
style:
  background: "#FAFAFA"
"##;
    let config: MenuConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.animation_duration_ms, 150);
    assert_eq!(config.screen_indent, 8.0);
    assert_eq!(
        config.easing,
        Easing::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0
        }
    );
    assert_eq!(config.style.background, Color::rgb(0xFA, 0xFA, 0xFA));
    assert_eq!(config.style.corner_radius, 4.0);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = MenuConfig::default().with_duration_ms(120).with_rtl(true);
    config.test_id = Some("overflow".to_string());
    config.style.divider = Color::rgba(0x12, 0x34, 0x56, 0x78);
    config.save_to(&path).unwrap();

    assert_eq!(MenuConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = MenuConfig::load_from(&dir.path().join("missing.yaml"));
    assert_eq!(config, MenuConfig::default());
}

#[test]
fn test_invalid_yaml_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "animation_duration_ms: [not, a, number]").unwrap();

    assert_eq!(MenuConfig::load_from(&path), MenuConfig::default());
}

#[test]
fn test_invalid_color_is_rejected() {
    let yaml = "style:\n  text: \"#12345\"\n";
    assert!(serde_yaml::from_str::<MenuConfig>(yaml).is_err());
}

// ========================================================================
// Color Tests
// ========================================================================

#[test]
fn test_color_hex_parsing() {
    assert_eq!(Color::from_hex("#FF8000").unwrap(), Color::rgb(255, 128, 0));
    assert_eq!(
        Color::from_hex("#00000080").unwrap(),
        Color::rgba(0, 0, 0, 0x80)
    );
    assert!(Color::from_hex("#GG0000").is_err());
    assert!(Color::from_hex("red").is_err());
}

#[test]
fn test_color_hex_output() {
    assert_eq!(Color::rgb(0x21, 0x21, 0x21).to_hex(), "#212121");
    assert_eq!(Color::rgba(0, 0, 0, 0x1F).to_hex(), "#0000001F");
}

#[test]
fn test_color_faded() {
    let color = Color::rgb(10, 20, 30).faded(0.5);
    assert_eq!(color.a, 128);
    assert_eq!(color.to_argb_u32(), 0x800A141E);
}
