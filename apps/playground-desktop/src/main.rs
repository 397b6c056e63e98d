use anyhow::{Context, Result};
use clap::Parser;
use playground_assets::TextureData;
use playground_common::{FrameClock, PlaygroundConfig};
use playground_input::{Action, HeldMovements, MouseTracker, Movement};
use playground_render::{Camera, FrameInput, aspect_ratio, update_lighting};
use playground_render_wgpu::{WgpuRenderer, request_device};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

/// Pixels of touchpad scrolling that count as one wheel notch.
const PIXELS_PER_SCROLL_LINE: f32 = 50.0;

#[derive(Parser)]
#[command(name = "playground-desktop", about = "Fly around a lit cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration (YAML). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Map a physical key to the action it triggers, if any.
fn key_action(key: KeyCode, pressed: bool) -> Option<Action> {
    let direction = match key {
        KeyCode::KeyW => Movement::Forward,
        KeyCode::KeyS => Movement::Backward,
        KeyCode::KeyA => Movement::Left,
        KeyCode::KeyD => Movement::Right,
        KeyCode::Space => Movement::Up,
        KeyCode::ControlLeft => Movement::Down,
        KeyCode::ShiftLeft => return Some(Action::Sprint(pressed)),
        KeyCode::Escape if pressed => return Some(Action::Quit),
        KeyCode::Tab if pressed => return Some(Action::ToggleCursor),
        _ => return None,
    };
    Some(Action::Move {
        direction,
        active: pressed,
    })
}

/// Camera, input and timing; everything the frame loop mutates besides the GPU.
struct AppState {
    config: PlaygroundConfig,
    camera: Camera,
    held: HeldMovements,
    mouse: MouseTracker,
    // Unbounded cursor position accumulated from raw motion while captured.
    virtual_cursor: (f32, f32),
    cursor_captured: bool,
    clock: FrameClock,
    quit_requested: bool,
}

impl AppState {
    fn new(config: PlaygroundConfig) -> Self {
        let (width, height) = (config.window.width, config.window.height);
        let mouse = MouseTracker::new(width, height);
        Self {
            camera: Camera::from_config(&config.camera),
            held: HeldMovements::new(),
            virtual_cursor: mouse.last_position(),
            mouse,
            cursor_captured: true,
            clock: FrameClock::new(),
            quit_requested: false,
            config,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Move { direction, active } => self.held.set(direction, active),
            Action::Sprint(active) => self.held.set_sprint(active),
            Action::Look { dx, dy } => {
                if self.cursor_captured {
                    self.camera.process_mouse_movement(dx, dy, true);
                }
            }
            Action::Zoom(amount) => self.camera.process_mouse_scroll(amount),
            Action::ToggleCursor => {
                self.cursor_captured = !self.cursor_captured;
                self.mouse.reset();
                tracing::debug!("cursor captured: {}", self.cursor_captured);
            }
            Action::Quit => self.quit_requested = true,
        }
    }

    /// Raw mouse motion while captured; turned into look offsets through the tracker.
    fn mouse_motion(&mut self, dx: f32, dy: f32) {
        if !self.cursor_captured {
            return;
        }
        self.virtual_cursor.0 += dx;
        self.virtual_cursor.1 += dy;
        let (x, y) = self.virtual_cursor;
        let (dx, dy) = self.mouse.offset(x, y);
        self.apply(Action::Look { dx, dy });
    }

    /// Advance the camera by the held movement keys.
    fn update(&mut self, dt: f32) {
        let camera = &mut self.camera;
        self.held
            .apply(dt, |direction, dt| camera.process_keyboard(direction, dt));
    }
}

/// Window and GPU resources, created once the event loop is running.
struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
}

impl GpuState {
    fn new(
        event_loop: &ActiveEventLoop,
        app: &PlaygroundConfig,
        diffuse: &TextureData,
        specular: &TextureData,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(app.window.title.clone())
            .with_inner_size(PhysicalSize::new(app.window.width, app.window.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let (adapter, device, queue) = request_device(&instance, &surface)?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if app.window.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            config.width,
            config.height,
            diffuse,
            specular,
        )?;

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    /// Framebuffer size changed.
    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn set_cursor_captured(&self, captured: bool) {
        if captured {
            let grabbed = self
                .window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
            if let Err(e) = grabbed {
                tracing::warn!("cursor grab unavailable: {e}");
            }
        } else if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            tracing::warn!("failed to release cursor: {e}");
        }
        self.window.set_cursor_visible(!captured);
    }
}

struct PlaygroundApp {
    state: AppState,
    diffuse: TextureData,
    specular: TextureData,
    gpu: Option<GpuState>,
    init_error: Option<anyhow::Error>,
}

impl PlaygroundApp {
    fn new(config: PlaygroundConfig, diffuse: TextureData, specular: TextureData) -> Self {
        Self {
            state: AppState::new(config),
            diffuse,
            specular,
            gpu: None,
            init_error: None,
        }
    }

    fn redraw(&mut self) {
        let dt = self.state.clock.tick(Instant::now());
        self.state.update(dt);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = update_lighting(&FrameInput {
            camera: &self.state.camera,
            light: &self.state.config.light,
            material: &self.state.config.material,
            placements: &self.state.config.placements,
            aspect: aspect_ratio(gpu.config.width, gpu.config.height),
            elapsed: self.state.clock.elapsed(),
        });
        gpu.renderer.render(&gpu.device, &gpu.queue, &view, &frame);

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for PlaygroundApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match GpuState::new(event_loop, &self.state.config, &self.diffuse, &self.specular) {
            Ok(gpu) => {
                gpu.set_cursor_captured(self.state.cursor_captured);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("initialization failed: {e:#}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::Focused(false) => {
                self.state.held.clear();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let Some(action) = key_action(key, key_state == ElementState::Pressed) else {
                    return;
                };
                self.state.apply(action);
                if action == Action::ToggleCursor {
                    if let Some(gpu) = &self.gpu {
                        gpu.set_cursor_captured(self.state.cursor_captured);
                    }
                }
                if self.state.quit_requested {
                    event_loop.exit();
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                self.state.apply(Action::Zoom(lines));
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.state.mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("playground-desktop starting");

    let config = PlaygroundConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    let diffuse = TextureData::load_or_solid(
        config.material.diffuse_texture.as_deref(),
        [255, 255, 255, 255],
    )
    .context("failed to load diffuse texture")?;
    let specular = TextureData::load_or_solid(
        config.material.specular_texture.as_deref(),
        [255, 255, 255, 255],
    )
    .context("failed to load specular texture")?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlaygroundApp::new(config, diffuse, specular);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.init_error {
        return Err(e);
    }
    tracing::info!("playground-desktop exiting");
    Ok(())
}
