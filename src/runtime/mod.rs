//! Runtime module - winit/platform integration for the demo
//!
//! - `app` - ApplicationHandler, window management and the menu host

pub mod app;

pub use app::App;
