//! Vixen: a minimal viewer for one animated glTF model.
//!
//! This crate re-exports the workspace crates under short module names:
//!
//! | Module        | Crate             |
//! |---------------|-------------------|
//! | [`core`]      | `vixen_core`      |
//! | [`animation`] | `vixen_animation` |
//! | [`scene`]     | `vixen_scene`     |
//! | [`assets`]    | `vixen_assets`    |
//! | [`render`]    | `vixen_render`    |
//! | [`app`]       | `vixen_app`       |
//!
//! ```rust,ignore
//! use vixen::app::{App, ViewerConfig};
//!
//! fn main() -> vixen::Result<()> {
//!     env_logger::init();
//!     App::new(ViewerConfig::default()).run()
//! }
//! ```

pub use vixen_animation as animation;
pub use vixen_app as app;
pub use vixen_assets as assets;
pub use vixen_core as core;
pub use vixen_render as render;
pub use vixen_scene as scene;

pub use vixen_core::{AssetError, Error, Result};

pub mod prelude {
    pub use vixen_animation::{ActionRegistry, AnimationClip, AnimationController};
    pub use vixen_app::{FrameState, OrbitControls, ViewerConfig, ViewerContext, ViewportState};
    pub use vixen_assets::{GltfLoader, LoadHandle, Prefab};
    pub use vixen_core::{ActionId, ControlPanel, Input, PanelCommand};
    pub use vixen_render::{HeadlessRenderer, RenderBackend, RenderTargetSize};
    pub use vixen_scene::{Camera, Scene};

    #[cfg(feature = "winit")]
    pub use vixen_app::App;
}
