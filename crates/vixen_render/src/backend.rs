use vixen_core::Result;
use vixen_scene::{Camera, Scene};

use crate::target::RenderTargetSize;

/// Extra GPU work drawn on top of the scene into the same surface texture.
pub trait SurfaceOverlay {
    fn record(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size: RenderTargetSize,
    );
}

/// What the frame loop needs from a renderer.
pub trait RenderBackend {
    /// Resizes the drawing surface. Zero-sized targets are remembered but
    /// not applied to the GPU surface.
    fn resize(&mut self, size: RenderTargetSize);

    fn size(&self) -> RenderTargetSize;

    /// Presents one frame of `scene` seen through `camera`, then the overlay.
    ///
    /// [`WgpuRenderer`](crate::WgpuRenderer) clears to the scene background
    /// and draws no geometry. [`HeadlessRenderer`](crate::HeadlessRenderer)
    /// records what it was given.
    fn render(&mut self, scene: &Scene, camera: &Camera, overlay: Option<&mut dyn SurfaceOverlay>) -> Result<()>;
}
