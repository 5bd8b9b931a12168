use std::sync::Arc;
use std::time::Instant;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::animation::AnimatorState;
use crate::config::{WaveConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::{AppError, ErrorBanner};
use crate::gpu::Renderer;

/// Application state
pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    animator: AnimatorState,
    start: Instant,
    cursor: Vec2,
    fps_counter: FpsCounter,
    fps: f64,
    banner: ErrorBanner,
    /// Banner holds a surface error that a good frame clears
    surface_error: bool,
    startup_error: Option<AppError>,
}

impl App {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            animator: AnimatorState::new(WaveConfig::default(), WINDOW_WIDTH, WINDOW_HEIGHT),
            start: Instant::now(),
            cursor: Vec2::ZERO,
            fps_counter: FpsCounter::new(),
            fps: 0.0,
            banner: ErrorBanner::default(),
            surface_error: false,
            startup_error: None,
        }
    }

    /// Error that stopped initialization, if any
    pub fn take_startup_error(&mut self) -> Option<AppError> {
        self.startup_error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        log::info!("Initializing {}...", WINDOW_TITLE);

        let window_attrs = Window::default_attributes()
            .with_title(format!("{} - Initializing...", WINDOW_TITLE))
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let config = &self.animator.config;
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            config.box_size,
            self.animator.field.len(),
        ))?;

        let size = window.inner_size();
        self.animator.resize(size.width, size.height);

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Move mouse: Ripple the grid");
        log::info!("  Drag: Orbit the camera");
        log::info!("  Click: Explode");
        log::info!("  Escape: Quit");

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn render(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        let animator = &mut self.animator;
        let renderer = &mut self.renderer;

        // A panicking frame is reported in the title and the loop keeps going
        let frame = self.banner.guard(|| {
            animator.update(elapsed);
            match renderer {
                Some(renderer) => renderer.render(&animator.scene()),
                None => Ok(()),
            }
        });
        match frame {
            Some(Ok(())) if self.surface_error => {
                self.banner.clear();
                self.surface_error = false;
            }
            Some(Ok(())) => {}
            Some(Err(e)) => {
                self.banner.report(format!("Surface error: {}", e));
                self.surface_error = true;
            }
            None => self.surface_error = false,
        }

        if let Some(fps) = self.fps_counter.tick() {
            self.fps = fps;
        }

        // Headline changes between FPS ticks, so refresh the title every frame
        if let Some(window) = &self.window {
            let title = format!(
                "{} - {} - {:.0} FPS",
                WINDOW_TITLE,
                self.animator.headline.text(),
                self.fps
            );
            window.set_title(&self.banner.decorate(&title));
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.startup_error = Some(e);
            event_loop.exit();
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
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    log::info!("Escape pressed, exiting...");
                    event_loop.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.animator.on_pointer_move(self.cursor);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.animator.on_pointer_down(self.cursor),
                ElementState::Released => {
                    self.animator.on_pointer_up(self.cursor);
                }
            },
            WindowEvent::Resized(new_size) => {
                log::info!("Window resized to {}x{}", new_size.width, new_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
                self.animator.resize(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.render();
                // Request another frame immediately
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Simple FPS counter
struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
