//! Render backend contract and backends.
//!
//! The frame loop talks to a [`RenderBackend`]. [`WgpuRenderer`] clears a
//! window surface and composites the panel overlay on it; it does not draw
//! scene meshes. [`HeadlessRenderer`] records calls instead of drawing.

pub mod backend;
pub mod headless;
pub mod settings;
pub mod target;
pub mod wgpu_backend;

pub use backend::{RenderBackend, SurfaceOverlay};
pub use headless::HeadlessRenderer;
pub use settings::{RendererSettings, ShadowMapKind, ShadowSettings};
pub use target::RenderTargetSize;
pub use wgpu_backend::WgpuRenderer;
