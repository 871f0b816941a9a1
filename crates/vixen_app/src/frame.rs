//! Frame Loop
//!
//! One [`tick`](ViewerContext::tick) per redraw, in a fixed order: deliver a
//! finished load, advance the clock, advance animation, update the orbit
//! controls, propagate transforms, render once. Rescheduling is left to the
//! caller (the winit runner requests the next redraw).

use vixen_core::FrameTime;
use vixen_render::{RenderBackend, SurfaceOverlay};

use crate::context::ViewerContext;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Seconds since the previous tick; never negative.
    pub delta: f32,
    pub frame_count: u64,
}

impl<R: RenderBackend> ViewerContext<R> {
    /// Runs one frame against the system clock.
    pub fn tick(&mut self, overlay: Option<&mut dyn SurfaceOverlay>) -> FrameState {
        self.poll_load();
        let time = self.clock.tick();
        self.run_frame(time, overlay)
    }

    /// Runs one frame as if the clock read `elapsed` seconds.
    pub fn tick_at(&mut self, elapsed: f32, overlay: Option<&mut dyn SurfaceOverlay>) -> FrameState {
        self.poll_load();
        let time = self.clock.advance_to(elapsed);
        self.run_frame(time, overlay)
    }

    fn run_frame(&mut self, time: FrameTime, overlay: Option<&mut dyn SurfaceOverlay>) -> FrameState {
        self.controller.advance(time.delta, &mut self.scene);

        let camera_node = self.stage.camera;
        let fov = self.scene.cameras.get(camera_node).map_or(self.config.camera.fov, |c| c.fov.to_degrees());
        if let Some(node) = self.scene.get_node_mut(camera_node) {
            self.controls.update(&mut node.transform, &self.input, fov, time.delta);
        }

        self.scene.update_matrix_world();

        match self.scene.main_camera() {
            Some(camera) => {
                if let Err(e) = self.renderer.render(&self.scene, camera, overlay) {
                    log::error!("Render failed: {e}");
                }
            }
            None => log::warn!("No active camera, skipping render"),
        }

        self.input.start_frame();

        FrameState {
            elapsed: time.elapsed,
            delta: time.delta,
            frame_count: self.clock.frame_count(),
        }
    }
}
