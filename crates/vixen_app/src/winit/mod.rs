//! winit runner
//!
//! [`App`] opens the window, creates the wgpu renderer and the panel
//! overlay, starts the model load and then drives
//! [`ViewerContext::tick`](crate::ViewerContext::tick) on every redraw.
//!
//! ```rust,ignore
//! use vixen::app::{App, ViewerConfig};
//!
//! fn main() -> vixen::Result<()> {
//!     App::new(ViewerConfig::default()).run()
//! }
//! ```

use std::sync::Arc;

use vixen_core::{Error, Result};
use vixen_render::{SurfaceOverlay, WgpuRenderer};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::ViewerConfig;
use crate::context::ViewerContext;
use crate::panel_ui::PanelOverlay;
use crate::viewport::ViewportState;

pub mod input_adapter;

pub struct App {
    config: ViewerConfig,
}

impl App {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.window_title = title.into();
        self
    }

    /// Blocks until the window closes.
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new().map_err(|e| Error::EventLoopError(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner {
            config: self.config,
            window: None,
            viewer: None,
            overlay: None,
        };
        event_loop
            .run_app(&mut runner)
            .map_err(|e| Error::EventLoopError(e.to_string()))
    }
}

struct AppRunner {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    viewer: Option<ViewerContext<WgpuRenderer>>,
    overlay: Option<PanelOverlay>,
}

impl AppRunner {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let [width, height] = self.config.window_size;
        let attributes = Window::default_attributes()
            .with_title(&self.config.window_title)
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(|e| Error::WindowError(e.to_string()))?,
        );

        let scale = window.scale_factor() as f32;
        let physical = window.inner_size();
        let size = ViewportState::from_physical(physical.width, physical.height, scale).target_size();

        log::info!("Initializing renderer backend...");
        let renderer = pollster::block_on(WgpuRenderer::new(window.clone(), &self.config.renderer, size))?;
        let overlay = PanelOverlay::new(&renderer.device, renderer.color_format(), &window);

        let mut viewer = ViewerContext::new(self.config.clone(), renderer);
        viewer.resize_surface(physical.width, physical.height, scale);
        viewer.start_loading();

        self.window = Some(window);
        self.viewer = Some(viewer);
        self.overlay = Some(overlay);
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(window), Some(viewer), Some(overlay)) = (&self.window, &mut self.viewer, &mut self.overlay) else {
            return;
        };

        let commands = overlay.run_frame(window, &viewer.panel, viewer.controller.registry());
        viewer.apply_panel_commands(commands);

        viewer.tick(Some(overlay as &mut dyn SurfaceOverlay));
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Fatal renderer error: {e}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(viewer)) = (&self.window, &mut self.viewer) else {
            return;
        };

        let consumed = self
            .overlay
            .as_mut()
            .is_some_and(|overlay| overlay.handle_input(window, &event));
        if !consumed {
            input_adapter::process_window_event(&mut viewer.input, &event, window.scale_factor());
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(physical) => {
                viewer.resize_surface(physical.width, physical.height, window.scale_factor() as f32);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let physical = window.inner_size();
                viewer.resize_surface(physical.width, physical.height, scale_factor as f32);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(viewer) = &self.viewer {
            log::info!("Exiting after {} frames", viewer.frame_count());
        }
    }
}
