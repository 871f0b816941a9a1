use std::sync::Arc;

use crate::binding::{PropertyBinding, TargetPath, TrackValue};
use crate::clip::{AnimationClip, TrackData};
use crate::tracks::KeyframeCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// Playback state of one clip bound to the animated object.
///
/// A new action is stopped. [`play`](Self::play) resumes from the current
/// cursor; [`stop`](Self::stop) halts playback and rewinds to the start.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    enabled: bool,

    pub bindings: Vec<PropertyBinding>,

    pub(crate) track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: false,
            bindings: Vec::new(),
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: Vec<PropertyBinding>) -> Self {
        self.bindings = bindings;
        self
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    pub fn play(&mut self) {
        self.enabled = true;
        self.paused = false;
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.paused = false;
        self.time = 0.0;
        self.track_cursors.fill(KeyframeCursor::default());
    }

    /// Whether the action has been played and not stopped since.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the mixer advances this action's time.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.enabled && !self.paused
    }

    /// Advances local time by `dt` scaled by `time_scale`.
    pub fn update(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                self.time = self.time.rem_euclid(duration);
            }
            LoopMode::PingPong => {
                let period = duration * 2.0;
                let t = self.time.rem_euclid(period);
                self.time = if t > duration { period - t } else { t };
            }
        }
    }

    /// Samples the track behind `binding` at the current time.
    ///
    /// Returns `None` when the track is empty or its value type does not
    /// match the bound property.
    pub fn sample(&mut self, binding: &PropertyBinding) -> Option<TrackValue> {
        let track = self.clip.tracks.get(binding.track_index)?;
        let cursor = self.track_cursors.get_mut(binding.track_index)?;

        match (&track.data, binding.target) {
            (TrackData::Vector3(t), TargetPath::Translation) => {
                t.sample_with_cursor(self.time, cursor).map(TrackValue::Translation)
            }
            (TrackData::Vector3(t), TargetPath::Scale) => {
                t.sample_with_cursor(self.time, cursor).map(TrackValue::Scale)
            }
            (TrackData::Quaternion(t), TargetPath::Rotation) => {
                t.sample_with_cursor(self.time, cursor).map(TrackValue::Rotation)
            }
            _ => None,
        }
    }
}
