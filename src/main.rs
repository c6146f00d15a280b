//! Interactive demo: a button that opens an anchored menu
//!
//! Left-click the button to open the menu, right-click anywhere to move the
//! button, Escape or a click outside the panel dismisses it.

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use anchored_menu::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    anchored_menu::tracing::init();

    let args = CliArgs::parse();
    let (width, height) = (args.width, args.height);
    let config = args.into_config();
    tracing::info!(
        duration_ms = config.animation_duration_ms,
        rtl = ?config.rtl,
        "starting menu demo"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, width, height);

    event_loop.run_app(&mut app)?;

    Ok(())
}
