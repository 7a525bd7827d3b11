//! Application event loop and per-frame rendering.
//!
//! winit delivers all pending input events before the redraw of the same
//! batch, so the camera always reflects the latest mouse input when a
//! frame's view matrix is built. Each redraw: advance the camera by the
//! elapsed wall-clock time, re-upload the camera uniform, then record one
//! render pass that draws every block followed by the crosshair overlay.

use std::{iter, sync::Arc};

use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window},
};

use crate::{
    context::Context,
    data_structures::{
        crosshair::{CROSSHAIR_HALF_SIZE, CROSSHAIR_VERTEX_COUNT, Crosshair},
        texture::Texture,
    },
    scene::{Scene, demo_layout},
};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "Neon Revolution";

/// Everything that exists once the window and GPU are up.
struct AppState {
    ctx: Context,
    scene: Scene,
    crosshair: Crosshair,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = Context::new(window).await?;
        let scene = Scene::new(&ctx.device, &demo_layout());
        let crosshair = Crosshair::new(&ctx.device, CROSSHAIR_HALF_SIZE);
        Ok(Self {
            ctx,
            scene,
            crosshair,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            // Only the projection changes with the aspect ratio.
            self.ctx.projection.resize(width, height);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture =
                Texture::create_depth_texture(&self.ctx.device, [width, height], "depth_texture");
        }
    }

    fn update(&mut self, dt: Duration) {
        let keys = self.ctx.camera.keys;
        self.ctx.camera.camera.process_keyboard(&keys, dt);
        self.ctx
            .camera
            .uniform
            .update_view_proj(&self.ctx.camera.camera, &self.ctx.projection);
        self.ctx.queue.write_buffer(
            &self.ctx.camera.buffer,
            0,
            bytemuck::cast_slice(&[self.ctx.camera.uniform]),
        );
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Keep the loop continuously animating.
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.ctx.pipelines.block);
            render_pass.set_bind_group(0, &self.ctx.camera.bind_group, &[]);
            for block in &self.scene.blocks {
                render_pass.set_vertex_buffer(0, block.vertex_buffer.slice(..));
                render_pass.set_vertex_buffer(1, block.instance_buffer.slice(..));
                render_pass.draw(0..block.vertex_count, 0..1);
            }

            // Crosshair last so it sits on top; its pipeline ignores depth.
            render_pass.set_pipeline(&self.ctx.pipelines.crosshair);
            render_pass.set_vertex_buffer(0, self.crosshair.vertex_buffer.slice(..));
            render_pass.draw(0..CROSSHAIR_VERTEX_COUNT, 0..1);
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    state: Option<AppState>,
    last_time: Instant,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new() -> anyhow::Result<Self> {
        Ok(Self {
            async_runtime: tokio::runtime::Runtime::new()?,
            state: None,
            last_time: Instant::now(),
            startup_error: None,
        })
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        // A fly camera wants the cursor captured and hidden. Locked grab is
        // not supported on every platform, so fall back to confining.
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            log::warn!("cursor grab is not available: {}", e);
        }
        window.set_cursor_visible(false);

        let mut state = self.async_runtime.block_on(AppState::new(window))?;
        let size = state.ctx.window.inner_size();
        state.resize(size.width, size.height);
        state.ctx.window.request_redraw();

        self.state = Some(state);
        self.last_time = Instant::now();
        Ok(())
    }

    /// A startup failure captured inside the event loop, if any.
    pub fn take_startup_error(&mut self) -> Option<anyhow::Error> {
        self.startup_error.take()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };
        // Mouse look runs on raw motion: with the cursor grabbed, window
        // cursor positions are frozen or clamped to the window border.
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            state.ctx.camera.camera.process_mouse_delta(dx, dy);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::Focused(true) => {
                // The cursor may have jumped while unfocused; take the next
                // sample as the new reference instead of a huge offset.
                state.ctx.camera.camera.reset_cursor();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state.is_pressed();
                let keys = &mut state.ctx.camera.keys;
                match code {
                    KeyCode::KeyW => keys.forward = pressed,
                    KeyCode::KeyS => keys.backward = pressed,
                    KeyCode::KeyA => keys.left = pressed,
                    KeyCode::KeyD => keys.right = pressed,
                    KeyCode::Escape if pressed => event_loop.exit(),
                    _ => (),
                }
            }
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now - self.last_time;
                self.last_time = now;
                state.update(dt);

                match state.render() {
                    Ok(_) => (),
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => (),
        }
    }
}

/// Run the viewer until the window closes.
///
/// Startup failures (window, device, shader) surface here as an `Err`, so
/// the process exits non-zero with a printed diagnostic.
pub fn run() -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new()?;
    event_loop.run_app(&mut app)?;

    match app.take_startup_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
