//! Keyframe animation for the Vixen viewer.
//!
//! Clips hold keyframe tracks addressed by node name. The [`AnimationMixer`]
//! binds them to an [`AnimationTarget`] and drives their playback; the
//! [`AnimationController`] layers the exclusive-play rule and control panel
//! wiring on top.

mod values;

pub mod action;
pub mod binding;
pub mod clip;
pub mod controller;
pub mod mixer;
pub mod tracks;

pub use action::{AnimationAction, LoopMode};
pub use binding::{AnimationTarget, PropertyBinding, TargetPath, TrackValue, bind_clip};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use controller::{ActionEntry, ActionRegistry, AnimationController, DEFAULT_FOLDER_TITLE, STOP_BUTTON_LABEL};
pub use mixer::{ActionHandle, AnimationMixer};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
