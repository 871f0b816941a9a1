use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShadowMapKind {
    Basic,
    Pcf,
    #[default]
    PcfSoft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    pub enabled: bool,
    pub kind: ShadowMapKind,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: ShadowMapKind::PcfSoft,
        }
    }
}

/// Backend configuration; serializable so it can sit in the viewer config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    pub vsync: bool,
    pub shadows: ShadowSettings,
    /// Linear RGBA used when the scene has no background.
    pub clear_color: [f32; 4],
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            shadows: ShadowSettings::default(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
