use std::cell::RefCell;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use anchored_menu::config::MenuConfig;
use anchored_menu::content::{ContentLayout, MenuEntry, MenuItem, ITEM_FONT_SIZE};
use anchored_menu::geometry::{Point, Rect, ViewportInfo};
use anchored_menu::menu::{Menu, MenuHost};
use anchored_menu::messages::MeasureRequest;
use anchored_menu::model::Phase;
use anchored_menu::view::{render_anchor_button, render_menu, Frame, TextPainter};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const ANCHOR_SIZE: (f32, f32) = (96.0, 36.0);

/// Host callbacks queued by the menu and answered on the event loop
#[derive(Debug)]
enum HostEvent {
    Measure(MeasureRequest),
}

/// Menu host backed by the demo window
struct DemoHost {
    tx: Sender<HostEvent>,
    overlay_visible: bool,
    wants_frames: bool,
    needs_redraw: bool,
}

impl MenuHost for DemoHost {
    fn measure_anchor(&mut self, request: MeasureRequest) {
        // Measurement is answered asynchronously, after the current event
        let _ = self.tx.send(HostEvent::Measure(request));
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
        self.needs_redraw = true;
    }

    fn request_frame(&mut self) {
        self.wants_frames = true;
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}

pub struct App {
    config: MenuConfig,
    menu: Menu<DemoHost>,
    entries: Vec<MenuEntry>,
    text: TextPainter,
    /// Anchor button in window pixels; right-click moves it
    anchor: Rect,
    status: Rc<RefCell<String>>,
    window: Option<Rc<Window>>,
    surface: Option<Surface<Rc<Window>, Rc<Window>>>,
    mouse_position: Option<Point>,
    last_frame: Instant,
    msg_rx: Receiver<HostEvent>,
}

impl App {
    pub fn new(config: MenuConfig, window_width: u32, window_height: u32) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let viewport = ViewportInfo::new(window_width as f32, window_height as f32);
        let host = DemoHost {
            tx: msg_tx,
            overlay_visible: false,
            wants_frames: false,
            needs_redraw: false,
        };

        let status = Rc::new(RefCell::new(String::from("Click the button")));
        let hidden_status = Rc::clone(&status);
        let menu = Menu::new(config.clone(), viewport, false, host).on_hidden(move || {
            tracing::debug!("menu hidden ({})", hidden_status.borrow());
        });

        let text = TextPainter::load(config.font_path.as_deref(), ITEM_FONT_SIZE);
        if !text.has_font() {
            tracing::info!("No label font configured, drawing placeholder labels");
        }

        Self {
            config,
            menu,
            entries: demo_entries(),
            text,
            anchor: Rect::new(24.0, 24.0, ANCHOR_SIZE.0, ANCHOR_SIZE.1),
            status,
            window: None,
            surface: None,
            mouse_position: None,
            last_frame: Instant::now(),
            msg_rx,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Anchored Menu")
            .with_inner_size(LogicalSize::new(
                self.menu.model().viewport.width,
                self.menu.model().viewport.height,
            ));

        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("creating window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let surface = Surface::new(&context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        self.window = Some(window);
        self.surface = Some(surface);
        let size = self.window_size();
        self.resize(size.0, size.1)
    }

    fn window_size(&self) -> (u32, u32) {
        self.window
            .as_ref()
            .map(|w| {
                let size = w.inner_size();
                (size.width, size.height)
            })
            .unwrap_or((1, 1))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };
        if let Some(surface) = self.surface.as_mut() {
            surface
                .resize(w, h)
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }
        self.menu
            .set_viewport(ViewportInfo::new(width as f32, height as f32));
        Ok(())
    }

    /// Answer queued host callbacks; the panel reports its layout once the overlay is up
    fn process_host_events(&mut self) {
        while let Ok(event) = self.msg_rx.try_recv() {
            match event {
                HostEvent::Measure(request) => {
                    self.menu.anchor_measured(request, Some(self.anchor));
                }
            }
        }

        if self.menu.model().phase() == Phase::AwaitingLayout {
            let text = &self.text;
            let natural = ContentLayout::measure(&self.entries, |label| text.measure_width(label));
            self.menu.panel_layout(natural);
        }
    }

    fn handle_click(&mut self, button: MouseButton, position: Point) {
        if button == MouseButton::Right {
            self.anchor = Rect::new(position.x, position.y, ANCHOR_SIZE.0, ANCHOR_SIZE.1);
            self.menu.host_mut().needs_redraw = true;
            return;
        }
        if button != MouseButton::Left {
            return;
        }

        if self.menu.host().overlay_visible {
            let panel = self.menu.model().panel_rect();
            if !panel.contains(position.x, position.y) {
                self.menu.dismiss_requested();
                return;
            }

            let rows = ContentLayout::rows(&self.entries, self.menu.model().panel_size().width);
            let local = Point::new(position.x - panel.x, position.y - panel.y);
            if let Some(index) = ContentLayout::hit_test(&rows, local) {
                let label = match &self.entries[index] {
                    MenuEntry::Item(item) => item.label.clone(),
                    MenuEntry::Divider(_) => return,
                };
                tracing::info!("selected {:?}", label);
                let status = Rc::clone(&self.status);
                self.menu.hide(Some(Box::new(move || {
                    *status.borrow_mut() = format!("Selected {}", label);
                })));
            }
        } else if self.anchor.contains(position.x, position.y) {
            self.menu.show();
        }
    }

    fn render(&mut self) -> Result<()> {
        let (width, height) = self.window_size();
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        let style = &self.config.style;

        frame.clear(style.window_background.to_argb_u32());
        render_anchor_button(&mut frame, self.anchor, "Menu", style, &mut self.text);
        let status = self.status.borrow().clone();
        self.text.draw(
            &mut frame,
            16.0,
            height as f32 - 32.0,
            &status,
            style.text.to_argb_u32(),
        );

        let highlighted = self.mouse_position.and_then(|p| {
            let panel = self.menu.model().panel_rect();
            let rows = ContentLayout::rows(&self.entries, self.menu.model().panel_size().width);
            ContentLayout::hit_test(&rows, Point::new(p.x - panel.x, p.y - panel.y))
        });
        render_menu(
            &mut frame,
            self.menu.model(),
            &self.entries,
            style,
            &mut self.text,
            highlighted,
        );

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn demo_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::item("Open"),
        MenuEntry::item("Rename"),
        MenuEntry::Item(MenuItem::new("Share (unavailable)").disabled()),
        MenuEntry::divider(),
        MenuEntry::item("Delete"),
    ]
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Err(e) = self.resize(size.width, size.height) {
                    tracing::warn!("{:#}", e);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some(Point::new(position.x as f32, position.y as f32));
                if self.menu.host().overlay_visible {
                    self.menu.host_mut().needs_redraw = true;
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(position) = self.mouse_position {
                    self.handle_click(button, position);
                }
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                // System back action
                self.menu.dismiss_requested();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::warn!("Render failed: {:#}", e);
                }
            }
            _ => {}
        }

        self.process_host_events();
        if std::mem::take(&mut self.menu.host_mut().needs_redraw) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.process_host_events();

        let now = Instant::now();
        if std::mem::take(&mut self.menu.host_mut().wants_frames) {
            let dt = now.duration_since(self.last_frame).min(FRAME_INTERVAL * 4);
            self.menu.frame(dt);
            self.last_frame = now;
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + FRAME_INTERVAL));
        } else {
            self.last_frame = now;
            event_loop.set_control_flow(ControlFlow::Wait);
        }

        if std::mem::take(&mut self.menu.host_mut().needs_redraw) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
