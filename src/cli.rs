//! Command-line argument parsing for the demo window

use std::path::PathBuf;

use clap::Parser;

use crate::config::MenuConfig;

/// Interactive anchored menu demo
#[derive(Parser, Debug)]
#[command(name = "menu-demo", version, about = "Interactive anchored menu demo")]
pub struct CliArgs {
    /// Config file to use instead of the user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Animation duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub duration: Option<u64>,

    /// Force right-to-left layout
    #[arg(long)]
    pub rtl: bool,

    /// Font used for labels (overrides the config)
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 480)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 640)]
    pub height: u32,
}

impl CliArgs {
    /// Load the config named by the arguments and apply overrides
    pub fn into_config(self) -> MenuConfig {
        let mut config = match &self.config {
            Some(path) => MenuConfig::load_from(path),
            None => MenuConfig::load(),
        };
        if let Some(duration) = self.duration {
            config.animation_duration_ms = duration;
        }
        if self.rtl {
            config.rtl = Some(true);
        }
        if self.font.is_some() {
            config.font_path = self.font;
        }
        config
    }
}
