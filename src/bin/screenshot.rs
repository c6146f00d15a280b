//! Screenshot generator for the anchored menu
//!
//! Plays YAML scenario timelines through the menu state machine headlessly
//! and renders the captured frames to PNG.
//!
//! Usage:
//!   cargo run --bin screenshot -- --scenario samples/scenarios/basic.yaml
//!   cargo run --bin screenshot -- --all
//!   cargo run --bin screenshot -- --all --json --out-dir screenshots/output

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use anchored_menu::config::MenuConfig;
use anchored_menu::content::{ContentLayout, MenuEntry, ITEM_FONT_SIZE};
use anchored_menu::geometry::{Rect, ViewportInfo};
use anchored_menu::menu::{Menu, MenuHost};
use anchored_menu::messages::MeasureRequest;
use anchored_menu::model::{Phase, VisibilityState};
use anchored_menu::placement::PlacementResult;
use anchored_menu::view::{render_anchor_button, render_menu, Frame, TextPainter};

const FRAME_STEP: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "screenshot", about = "Render anchored menu scenarios to PNG")]
struct Args {
    /// Path to a single scenario YAML file
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Run all scenarios in the scenarios directory
    #[arg(long)]
    all: bool,
    /// Directory containing scenario YAML files
    #[arg(long, default_value = "samples/scenarios")]
    scenarios_dir: PathBuf,
    /// Directory for output PNG files
    #[arg(long, default_value = "screenshots/output")]
    out_dir: PathBuf,
    /// Font for labels; placeholder bars are drawn without one
    #[arg(long)]
    font: Option<PathBuf>,
    /// Also write a JSON report of every capture next to the PNGs
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// Scenario YAML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct Scenario {
    name: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    /// Anchor rectangle; omitted means the anchor cannot be measured
    #[serde(default)]
    anchor: Option<Rect>,
    #[serde(default)]
    rtl: bool,
    #[serde(default)]
    duration_ms: Option<u64>,
    #[serde(default)]
    screen_indent: Option<f32>,
    entries: Vec<MenuEntry>,
    steps: Vec<Step>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
enum Step {
    Show,
    Hide,
    Dismiss,
    /// Advance the animation clock by this many milliseconds
    Wait(u64),
    /// Resize the window
    Resize { width: u32, height: u32 },
    /// Save the current frame under this name
    Capture(String),
}

fn default_width() -> u32 {
    375
}
fn default_height() -> u32 {
    812
}

/// One row of the `--json` report
#[derive(Serialize, Debug)]
struct CaptureReport {
    scenario: String,
    capture: String,
    state: VisibilityState,
    overlay_visible: bool,
    placement: PlacementResult,
    panel: Rect,
    opacity: f32,
}

// ---------------------------------------------------------------------------
// Headless host
// ---------------------------------------------------------------------------

/// Host that records requests so the driver can answer them synchronously
#[derive(Default)]
struct ScriptedHost {
    pending_measure: Option<MeasureRequest>,
    overlay_visible: bool,
    wants_frames: bool,
}

impl MenuHost for ScriptedHost {
    fn measure_anchor(&mut self, request: MeasureRequest) {
        self.pending_measure = Some(request);
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn request_frame(&mut self) {
        self.wants_frames = true;
    }
}

struct Player<'a> {
    scenario: &'a Scenario,
    menu: Menu<ScriptedHost>,
    text: TextPainter,
    viewport: (u32, u32),
}

impl<'a> Player<'a> {
    fn new(scenario: &'a Scenario, font: Option<&Path>) -> Self {
        let mut config = MenuConfig::default().with_rtl(scenario.rtl);
        if let Some(duration) = scenario.duration_ms {
            config = config.with_duration_ms(duration);
        }
        if let Some(indent) = scenario.screen_indent {
            config = config.with_screen_indent(indent);
        }
        config.test_id = Some(scenario.name.clone());

        let viewport = ViewportInfo::new(scenario.width as f32, scenario.height as f32);
        Self {
            scenario,
            menu: Menu::new(config, viewport, false, ScriptedHost::default()),
            text: TextPainter::load(font, ITEM_FONT_SIZE),
            viewport: (scenario.width, scenario.height),
        }
    }

    /// Answer outstanding host requests until the menu is idle
    fn settle(&mut self) {
        if let Some(request) = self.menu.host_mut().pending_measure.take() {
            self.menu.anchor_measured(request, self.scenario.anchor);
        }
        if self.menu.model().phase() == Phase::AwaitingLayout {
            let text = &self.text;
            let natural =
                ContentLayout::measure(&self.scenario.entries, |label| text.measure_width(label));
            self.menu.panel_layout(natural);
        }
    }

    fn wait(&mut self, ms: u64) {
        let mut remaining = Duration::from_millis(ms);
        self.settle();
        while !remaining.is_zero() {
            let step = remaining.min(FRAME_STEP);
            remaining -= step;
            if std::mem::take(&mut self.menu.host_mut().wants_frames) {
                self.menu.frame(step);
            }
            self.settle();
        }
    }

    fn apply(&mut self, step: &Step) {
        match step {
            Step::Show => {
                self.menu.show();
            }
            Step::Hide => {
                self.menu.hide(None);
            }
            Step::Dismiss => {
                self.menu.dismiss_requested();
            }
            Step::Wait(ms) => self.wait(*ms),
            Step::Resize { width, height } => {
                self.viewport = (*width, *height);
                self.menu
                    .set_viewport(ViewportInfo::new(*width as f32, *height as f32));
            }
            Step::Capture(_) => {}
        }
        self.settle();
    }

    fn render(&mut self) -> Vec<u32> {
        let (width, height) = self.viewport;
        let mut buffer = vec![0u32; (width * height) as usize];
        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        let style = &self.menu.model().config.style;

        frame.clear(style.window_background.to_argb_u32());
        if let Some(anchor) = self.scenario.anchor {
            render_anchor_button(&mut frame, anchor, "Menu", style, &mut self.text);
        }
        render_menu(
            &mut frame,
            self.menu.model(),
            &self.scenario.entries,
            style,
            &mut self.text,
            None,
        );
        buffer
    }

    fn report(&self, capture: &str) -> CaptureReport {
        let model = self.menu.model();
        CaptureReport {
            scenario: self.scenario.name.clone(),
            capture: capture.to_string(),
            state: model.visibility(),
            overlay_visible: self.menu.host().overlay_visible,
            placement: model.placement(),
            panel: model.panel_rect(),
            opacity: model.opacity(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn save_png(buffer: &[u32], width: u32, height: u32, path: &Path) -> Result<()> {
    // Convert ARGB (0xAARRGGBB) to RGBA bytes
    let rgba: Vec<u8> = buffer
        .iter()
        .flat_map(|&pixel| {
            [
                ((pixel >> 16) & 0xFF) as u8,
                ((pixel >> 8) & 0xFF) as u8,
                (pixel & 0xFF) as u8,
                ((pixel >> 24) & 0xFF) as u8,
            ]
        })
        .collect();

    let img = image::ImageBuffer::<image::Rgba<u8>, Vec<u8>>::from_raw(width, height, rgba)
        .context("failed to create image buffer")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    img.save(path)
        .with_context(|| format!("saving PNG to {}", path.display()))?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Scenario loading
// ---------------------------------------------------------------------------

fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let scenario: Scenario = serde_yaml::from_str(&content)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(scenario)
}

fn collect_scenarios(args: &Args) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    if let Some(ref path) = args.scenario {
        scenarios.push(load_scenario(path)?);
    } else if args.all {
        if !args.scenarios_dir.exists() {
            anyhow::bail!(
                "scenarios directory does not exist: {}",
                args.scenarios_dir.display()
            );
        }
        let mut entries: Vec<_> = std::fs::read_dir(&args.scenarios_dir)
            .with_context(|| format!("reading scenarios dir {}", args.scenarios_dir.display()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        entries.sort();

        for path in entries {
            match load_scenario(&path) {
                Ok(scenario) => scenarios.push(scenario),
                Err(e) => tracing::warn!("skipping {}: {:#}", path.display(), e),
            }
        }

        if scenarios.is_empty() {
            anyhow::bail!("no scenario files found in {}", args.scenarios_dir.display());
        }
    } else {
        anyhow::bail!("specify --scenario <file> or --all");
    }

    Ok(scenarios)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    anchored_menu::tracing::init();

    let args = Args::parse();
    let scenarios = collect_scenarios(&args)?;

    eprintln!(
        "Rendering {} scenario(s) → {}",
        scenarios.len(),
        args.out_dir.display()
    );

    let mut reports = Vec::new();
    for scenario in &scenarios {
        eprintln!("  {}", scenario.name);
        let mut player = Player::new(scenario, args.font.as_deref());

        for step in &scenario.steps {
            player.apply(step);
            if let Step::Capture(capture) = step {
                let (width, height) = player.viewport;
                let buffer = player.render();
                let out_path = args
                    .out_dir
                    .join(format!("{}-{}.png", scenario.name, capture));
                save_png(&buffer, width, height, &out_path)?;
                eprintln!("    saved {}", out_path.display());
                reports.push(player.report(capture));
            }
        }
    }

    if args.json {
        let path = args.out_dir.join("captures.json");
        let json = serde_json::to_string_pretty(&reports).context("serializing capture report")?;
        std::fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("creating directory {}", args.out_dir.display()))?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("  report {}", path.display());
    }

    eprintln!("Done!");
    Ok(())
}
