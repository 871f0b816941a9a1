//! egui view of the [`ControlPanel`].

use vixen_animation::ActionRegistry;
use vixen_core::{ControlPanel, PanelCommand};

/// Draws every panel folder in one window and returns the clicked commands.
///
/// Toggle buttons of running actions are drawn selected.
pub fn draw_panel(ctx: &egui::Context, panel: &ControlPanel, registry: &ActionRegistry) -> Vec<PanelCommand> {
    let mut clicked = Vec::new();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            for folder in panel.folders() {
                egui::CollapsingHeader::new(folder.title.as_str())
                    .default_open(folder.open)
                    .show(ui, |ui| {
                        for button in folder.buttons() {
                            let response = match button.command {
                                PanelCommand::Toggle(id) => {
                                    let running = registry.get(id).is_some_and(|e| e.running);
                                    ui.selectable_label(running, button.label.as_str())
                                }
                                PanelCommand::StopAll => ui.button(button.label.as_str()),
                            };
                            if response.clicked() {
                                clicked.push(button.command);
                            }
                        }
                    });
            }
        });

    clicked
}

#[cfg(feature = "winit")]
pub use overlay::PanelOverlay;

#[cfg(feature = "winit")]
mod overlay {
    use vixen_animation::ActionRegistry;
    use vixen_core::{ControlPanel, PanelCommand};
    use vixen_render::{RenderTargetSize, SurfaceOverlay};
    use winit::event::WindowEvent;
    use winit::window::Window;

    /// egui integration: winit input in, tessellated panel out through the
    /// renderer's overlay hook.
    pub struct PanelOverlay {
        egui_ctx: egui::Context,
        state: egui_winit::State,
        renderer: egui_wgpu::Renderer,
        clipped_primitives: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
    }

    impl PanelOverlay {
        pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Window) -> Self {
            let egui_ctx = egui::Context::default();
            let id = egui_ctx.viewport_id();
            let state = egui_winit::State::new(egui_ctx.clone(), id, window, None, None, None);
            let renderer = egui_wgpu::Renderer::new(device, output_format, egui_wgpu::RendererOptions::default());

            Self {
                egui_ctx,
                state,
                renderer,
                clipped_primitives: Vec::new(),
                textures_delta: egui::TexturesDelta::default(),
            }
        }

        /// Forwards a window event. Returns `true` when the panel consumed it.
        /// Button releases always pass through so drags can end.
        pub fn handle_input(&mut self, window: &Window, event: &WindowEvent) -> bool {
            let response = self.state.on_window_event(window, event);
            if let WindowEvent::MouseInput {
                state: winit::event::ElementState::Released,
                ..
            } = event
            {
                return false;
            }
            response.consumed
        }

        #[must_use]
        pub fn wants_pointer_input(&self) -> bool {
            self.egui_ctx.egui_wants_pointer_input()
        }

        /// Builds this frame's panel and returns what was clicked.
        pub fn run_frame(&mut self, window: &Window, panel: &ControlPanel, registry: &ActionRegistry) -> Vec<PanelCommand> {
            let raw_input = self.state.take_egui_input(window);
            self.egui_ctx.begin_pass(raw_input);

            let commands = super::draw_panel(&self.egui_ctx, panel, registry);

            let egui::FullOutput {
                shapes,
                textures_delta,
                platform_output,
                ..
            } = self.egui_ctx.end_pass();

            self.state.handle_platform_output(window, platform_output);
            self.textures_delta.append(textures_delta);
            self.clipped_primitives = self.egui_ctx.tessellate(shapes, self.egui_ctx.pixels_per_point());

            commands
        }
    }

    impl SurfaceOverlay for PanelOverlay {
        fn record(
            &mut self,
            device: &wgpu::Device,
            queue: &wgpu::Queue,
            encoder: &mut wgpu::CommandEncoder,
            view: &wgpu::TextureView,
            size: RenderTargetSize,
        ) {
            let (width, height) = size.surface_size();
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [width, height],
                pixels_per_point: self.egui_ctx.pixels_per_point(),
            };

            for (id, delta) in &self.textures_delta.set {
                self.renderer.update_texture(device, queue, *id, delta);
            }

            let user_buffers =
                self.renderer
                    .update_buffers(device, queue, encoder, &self.clipped_primitives, &screen_descriptor);
            if !user_buffers.is_empty() {
                queue.submit(user_buffers);
            }

            {
                let mut rpass = encoder
                    .begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("Panel Pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load,
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                        multiview_mask: None,
                    })
                    .forget_lifetime();

                self.renderer.render(&mut rpass, &self.clipped_primitives, &screen_descriptor);
            }

            for id in &self.textures_delta.free {
                self.renderer.free_texture(id);
            }
            self.textures_delta.set.clear();
            self.textures_delta.free.clear();
        }
    }
}
