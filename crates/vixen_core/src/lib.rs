//! Foundational types shared by every Vixen crate.
//!
//! - [`errors`]: the [`Error`] taxonomy and [`Result`] alias
//! - [`time`]: the monotonic frame [`Clock`]
//! - [`input`]: platform-agnostic pointer [`Input`]
//! - [`handle`]: [`NodeHandle`] and [`ActionId`]
//! - [`panel`]: the [`ControlPanel`] model

pub mod errors;
pub mod handle;
pub mod input;
pub mod panel;
pub mod time;

pub use errors::{AssetError, Error, Result};
pub use handle::{ActionId, NodeHandle};
pub use input::{ButtonState, Input, MouseButton};
pub use panel::{ControlFolder, ControlPanel, PanelButton, PanelCommand};
pub use time::{Clock, FrameTime};
