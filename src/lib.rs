//! Anchored popup menu - Elm-style state machine
//!
//! Measures an anchor element, places a floating panel next to it inside the
//! visible screen area, and animates the panel in and out. The host UI
//! framework supplies measurement, overlay and frame-scheduling capabilities.

pub mod animation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod content;
pub mod geometry;
pub mod menu;
pub mod messages;
pub mod model;
pub mod placement;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::MenuConfig;
pub use geometry::{Point, Rect, Size, ViewportInfo};
pub use menu::{Menu, MenuHost};
pub use messages::Msg;
pub use model::{MenuModel, VisibilityState};
pub use placement::{resolve, PlacementResult};
pub use update::{update, IgnoreReason, Transition};
