use glam::{Quat, Vec3};

use crate::binding::TargetPath;
use crate::tracks::KeyframeTrack;

/// Which node and property a track drives.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMeta {
    pub node_name: String,
    pub target: TargetPath,
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
        }
    }

    /// `(keyframes, expected values, actual values)`.
    #[must_use]
    pub fn value_counts(&self) -> (usize, usize, usize) {
        match self {
            TrackData::Vector3(track) => (track.times.len(), track.expected_value_count(), track.values.len()),
            TrackData::Quaternion(track) => (track.times.len(), track.expected_value_count(), track.values.len()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

/// A named, fixed-duration set of keyframe tracks.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    /// Seconds; the latest keyframe across all tracks.
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }
}
