/// Drawing target of one window.
///
/// `width` and `height` are logical pixels. `pixel_ratio` is the scene render
/// scale (it may be clamped below the display's ratio). The surface fields
/// are the window's backing store in device pixels, as the windowing system
/// reports it, with the display's own `scale_factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTargetSize {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub surface_width: u32,
    pub surface_height: u32,
    pub scale_factor: f32,
}

impl Default for RenderTargetSize {
    fn default() -> Self {
        Self::new(0, 0, 1.0)
    }
}

impl RenderTargetSize {
    /// A target whose surface is exactly `pixel_ratio` times the logical size.
    #[must_use]
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
            surface_width: scale(width, pixel_ratio),
            surface_height: scale(height, pixel_ratio),
            scale_factor: pixel_ratio,
        }
    }

    /// Replaces the surface size with the one the window reports.
    #[must_use]
    pub fn with_surface(mut self, surface_width: u32, surface_height: u32, scale_factor: f32) -> Self {
        self.surface_width = surface_width;
        self.surface_height = surface_height;
        self.scale_factor = scale_factor;
        self
    }

    /// Scene render size: logical size times `pixel_ratio`, rounded.
    #[must_use]
    pub fn render_size(&self) -> (u32, u32) {
        (scale(self.width, self.pixel_ratio), scale(self.height, self.pixel_ratio))
    }

    /// Size to configure the window surface with.
    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.surface_width == 0 || self.surface_height == 0
    }
}

fn scale(v: u32, ratio: f32) -> u32 {
    (v as f32 * ratio).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_size_rounds() {
        assert_eq!(RenderTargetSize::new(1024, 768, 2.0).render_size(), (2048, 1536));
        assert_eq!(RenderTargetSize::new(801, 601, 1.5).render_size(), (1202, 902));
    }

    #[test]
    fn surface_size_is_independent_of_render_scale() {
        let size = RenderTargetSize::new(1000, 667, 2.0).with_surface(3000, 2001, 3.0);

        assert_eq!(size.render_size(), (2000, 1334));
        assert_eq!(size.surface_size(), (3000, 2001));
        assert_eq!(size.scale_factor, 3.0);
    }

    #[test]
    fn zero_surface_is_empty() {
        assert!(RenderTargetSize::new(800, 600, 1.0).with_surface(0, 600, 1.0).is_empty());
        assert!(!RenderTargetSize::new(800, 600, 1.0).is_empty());
    }
}
