use glam::Vec3;

/// Shadow map settings with an orthographic shadow camera.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub map_size: u32,
    pub bias: f32,
    pub camera_left: f32,
    pub camera_right: f32,
    pub camera_top: f32,
    pub camera_bottom: f32,
    pub camera_near: f32,
    pub camera_far: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 1024,
            bias: 0.005,
            camera_left: -5.0,
            camera_right: 5.0,
            camera_top: 5.0,
            camera_bottom: -5.0,
            camera_near: 0.5,
            camera_far: 500.0,
        }
    }
}

impl ShadowConfig {
    /// Symmetric orthographic bounds `±extent`.
    #[must_use]
    pub fn with_extent(mut self, extent: f32) -> Self {
        self.camera_left = -extent;
        self.camera_right = extent;
        self.camera_top = extent;
        self.camera_bottom = -extent;
        self
    }

    #[must_use]
    pub fn with_far(mut self, far: f32) -> Self {
        self.camera_far = far;
        self
    }

    #[must_use]
    pub fn with_map_size(mut self, size: u32) -> Self {
        self.map_size = size;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Ambient,
    Directional,
}

#[derive(Debug, Clone)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
            cast_shadows: false,
            shadow: None,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional,
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }
}

/// `0xRRGGBB` to linear-agnostic RGB in `[0, 1]`.
#[must_use]
pub fn color_from_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}
