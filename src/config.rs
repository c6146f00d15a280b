//! Menu configuration persistence
//!
//! Construction options for a menu, stored as YAML in
//! `~/.config/anchored-menu/config.yaml`. Every instance carries its own copy,
//! so several menus can run with different durations or easing curves.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::placement::DEFAULT_SCREEN_INDENT;
use crate::theme::MenuStyle;

/// Menu construction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Length of the grow, fade-in and fade-out animations
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    /// Margin kept between the panel and the viewport edges
    #[serde(default = "default_screen_indent")]
    pub screen_indent: f32,
    #[serde(default)]
    pub easing: Easing,
    /// Right-to-left layout; `None` follows the host's text direction
    #[serde(default)]
    pub rtl: Option<bool>,
    #[serde(default)]
    pub style: MenuStyle,
    /// Identifier attached to log output for this menu
    #[serde(default)]
    pub test_id: Option<String>,
    /// TrueType/OpenType font used for row labels
    #[serde(default)]
    pub font_path: Option<std::path::PathBuf>,
}

fn default_animation_duration_ms() -> u64 {
    300
}

fn default_screen_indent() -> f32 {
    DEFAULT_SCREEN_INDENT
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration_ms(),
            screen_indent: default_screen_indent(),
            easing: Easing::default(),
            rtl: None,
            style: MenuStyle::default(),
            test_id: None,
            font_path: None,
        }
    }
}

impl MenuConfig {
    /// Config with instant transitions, for tests and screenshots
    pub fn instant() -> Self {
        Self {
            animation_duration_ms: 0,
            easing: Easing::Linear,
            ..Self::default()
        }
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Text direction after falling back to the host's system setting
    pub fn resolve_rtl(&self, host_rtl: bool) -> bool {
        self.rtl.unwrap_or(host_rtl)
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = Some(rtl);
        self
    }

    pub fn with_screen_indent(mut self, indent: f32) -> Self {
        self.screen_indent = indent;
        self
    }

    /// Load config from the user config directory, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
