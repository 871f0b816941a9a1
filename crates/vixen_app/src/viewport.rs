//! Resize Handler
//!
//! Keeps the viewport, camera projection and render target in step with the
//! window. Every notification is applied immediately.

use vixen_render::{RenderBackend, RenderTargetSize};
use vixen_scene::Camera;

/// Upper bound on the pixel ratio used for the render target.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    width: u32,
    height: u32,
    device_pixel_ratio: f32,
    aspect: f32,
    pixel_ratio: f32,
    surface_width: u32,
    surface_height: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

impl ViewportState {
    /// `width` and `height` are logical pixels.
    #[must_use]
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        let mut state = Self {
            width: 0,
            height: 0,
            device_pixel_ratio: 1.0,
            aspect: 1.0,
            pixel_ratio: 1.0,
            surface_width: 0,
            surface_height: 0,
        };
        state.update(width, height, device_pixel_ratio);
        state
    }

    /// Viewport of a window whose backing store is `physical_width` by
    /// `physical_height` device pixels.
    #[must_use]
    pub fn from_physical(physical_width: u32, physical_height: u32, scale_factor: f32) -> Self {
        let mut state = Self::new(0, 0, 1.0);
        state.update_physical(physical_width, physical_height, scale_factor);
        state
    }

    /// Recomputes the derived values from a logical size. The surface is
    /// assumed to be the logical size times the device ratio. A zero height
    /// keeps the previous aspect.
    pub fn update(&mut self, width: u32, height: u32, device_pixel_ratio: f32) {
        self.width = width;
        self.height = height;
        self.device_pixel_ratio = device_pixel_ratio;
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        let native = self.scale_factor();
        self.pixel_ratio = native.min(MAX_PIXEL_RATIO);
        self.surface_width = (width as f32 * native).round() as u32;
        self.surface_height = (height as f32 * native).round() as u32;
    }

    /// Same as [`update`](Self::update) for a size in device pixels. The
    /// surface keeps the exact physical size.
    pub fn update_physical(&mut self, physical_width: u32, physical_height: u32, scale_factor: f32) {
        let native = sanitize_ratio(scale_factor);
        let logical = |v: u32| (v as f32 / native).round() as u32;
        self.update(logical(physical_width), logical(physical_height), scale_factor);
        self.surface_width = physical_width;
        self.surface_height = physical_height;
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Device pixel ratio clamped to [`MAX_PIXEL_RATIO`].
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Device pixel ratio, or 1 when it is not a positive number.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        sanitize_ratio(self.device_pixel_ratio)
    }

    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    #[must_use]
    pub fn target_size(&self) -> RenderTargetSize {
        RenderTargetSize::new(self.width, self.height, self.pixel_ratio).with_surface(
            self.surface_width,
            self.surface_height,
            self.scale_factor(),
        )
    }
}

fn sanitize_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 }
}

/// Applies one resize notification, in logical pixels, to the viewport,
/// camera and renderer.
pub fn handle_resize(
    viewport: &mut ViewportState,
    camera: Option<&mut Camera>,
    renderer: &mut impl RenderBackend,
    width: u32,
    height: u32,
    device_pixel_ratio: f32,
) {
    viewport.update(width, height, device_pixel_ratio);
    apply_viewport(viewport, camera, renderer);
}

/// Like [`handle_resize`] for a window size in device pixels.
pub fn handle_surface_resize(
    viewport: &mut ViewportState,
    camera: Option<&mut Camera>,
    renderer: &mut impl RenderBackend,
    physical_width: u32,
    physical_height: u32,
    scale_factor: f32,
) {
    viewport.update_physical(physical_width, physical_height, scale_factor);
    apply_viewport(viewport, camera, renderer);
}

fn apply_viewport(viewport: &ViewportState, camera: Option<&mut Camera>, renderer: &mut impl RenderBackend) {
    if let Some(camera) = camera {
        camera.set_aspect(viewport.aspect());
        camera.update_projection_matrix();
    }

    renderer.resize(viewport.target_size());

    let (surface_width, surface_height) = viewport.surface_size();
    log::debug!(
        "Resized to {}x{} (surface {surface_width}x{surface_height}, dpr {}, pixel ratio {})",
        viewport.width(),
        viewport.height(),
        viewport.device_pixel_ratio(),
        viewport.pixel_ratio()
    );
}
