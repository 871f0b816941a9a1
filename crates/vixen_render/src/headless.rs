use glam::Mat4;
use vixen_core::{Error, Result};
use vixen_scene::{Camera, Scene};

use crate::backend::{RenderBackend, SurfaceOverlay};
use crate::settings::RendererSettings;
use crate::target::RenderTargetSize;

/// A backend without a GPU. Counts frames and remembers what it was asked
/// to draw, for tests and tools.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub settings: RendererSettings,
    size: RenderTargetSize,
    frames: u64,
    resizes: u64,
    last_camera_aspect: Option<f32>,
    last_view_projection: Option<Mat4>,
    last_node_count: usize,
    fail_next: bool,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new(settings: RendererSettings, size: RenderTargetSize) -> Self {
        Self {
            settings,
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn resize_count(&self) -> u64 {
        self.resizes
    }

    #[must_use]
    pub fn last_camera_aspect(&self) -> Option<f32> {
        self.last_camera_aspect
    }

    /// View-projection of the camera the last frame was rendered through.
    #[must_use]
    pub fn last_view_projection(&self) -> Option<Mat4> {
        self.last_view_projection
    }

    #[must_use]
    pub fn last_node_count(&self) -> usize {
        self.last_node_count
    }

    /// Makes the next [`render`](RenderBackend::render) call fail.
    pub fn fail_next_frame(&mut self) {
        self.fail_next = true;
    }
}

impl RenderBackend for HeadlessRenderer {
    fn resize(&mut self, size: RenderTargetSize) {
        self.size = size;
        self.resizes += 1;
    }

    fn size(&self) -> RenderTargetSize {
        self.size
    }

    fn render(&mut self, scene: &Scene, camera: &Camera, _overlay: Option<&mut dyn SurfaceOverlay>) -> Result<()> {
        if std::mem::take(&mut self.fail_next) {
            return Err(Error::SurfaceError("simulated frame failure".to_string()));
        }
        self.frames += 1;
        self.last_camera_aspect = Some(camera.aspect);
        self.last_view_projection = Some(*camera.view_projection_matrix());
        self.last_node_count = scene.nodes.len();
        Ok(())
    }
}
