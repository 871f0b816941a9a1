//! Viewer configuration
//!
//! [`ViewerConfig::default`] reproduces the stock Fox viewer. A JSON file can
//! override any subset of the fields.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use vixen_assets::LoaderSettings;
use vixen_core::Result;
use vixen_render::RendererSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 100.0,
            position: [2.0, 2.0, 2.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_title: String,
    /// Logical size of the initial window.
    pub window_size: [u32; 2],
    /// Directory that absolute asset paths such as `/models/...` resolve against.
    pub asset_root: PathBuf,
    pub model_path: String,
    pub model_scale: f32,
    pub draco_decoder_path: String,
    /// Title of the panel folder holding the clip buttons.
    pub folder_title: String,
    /// Start the first clip as soon as the model is loaded.
    pub autoplay: bool,
    pub camera: CameraConfig,
    pub orbit_target: [f32; 3],
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub renderer: RendererSettings,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Vixen Viewer".to_string(),
            window_size: [800, 600],
            asset_root: PathBuf::from("static"),
            model_path: "/models/Fox/glTF/Fox.gltf".to_string(),
            model_scale: 0.025,
            draco_decoder_path: "/draco/".to_string(),
            folder_title: "Fox".to_string(),
            autoplay: true,
            camera: CameraConfig::default(),
            orbit_target: [0.0, 0.75, 0.0],
            enable_damping: true,
            damping_factor: 0.05,
            renderer: RendererSettings::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// `model_path` joined onto `asset_root`, leading slash dropped.
    #[must_use]
    pub fn resolved_model_path(&self) -> PathBuf {
        self.asset_root.join(self.model_path.trim_start_matches('/'))
    }

    #[must_use]
    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            draco_decoder_path: self.draco_decoder_path.clone(),
        }
    }

    #[must_use]
    pub fn orbit_target(&self) -> Vec3 {
        Vec3::from_array(self.orbit_target)
    }

    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_array(self.camera.position)
    }
}
