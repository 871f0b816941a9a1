//! Application layer of the Vixen viewer.
//!
//! - [`ViewerContext`]: owns scene, renderer, animation controller and panel
//! - [`frame`]: the per-tick loop body
//! - [`viewport`]: resize and pixel-ratio handling
//! - [`controls`]: orbit camera
//! - [`config`]: [`ViewerConfig`] with the stock viewer's defaults
//! - `winit` (feature): the windowed runner and egui overlay

pub mod config;
pub mod context;
pub mod controls;
pub mod frame;
pub mod panel_ui;
pub mod stage;
pub mod viewport;

#[cfg(feature = "winit")]
pub mod winit;

pub use config::{CameraConfig, ViewerConfig};
pub use context::ViewerContext;
pub use controls::OrbitControls;
pub use frame::FrameState;
pub use panel_ui::draw_panel;
pub use stage::{StageNodes, build_stage};
pub use viewport::{MAX_PIXEL_RATIO, ViewportState, handle_resize, handle_surface_resize};

#[cfg(feature = "winit")]
pub use panel_ui::PanelOverlay;
#[cfg(feature = "winit")]
pub use self::winit::App;
