use glam::{Quat, Vec3};
use vixen_core::NodeHandle;

use crate::clip::AnimationClip;

/// The node property an animation track writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
}

/// Maps track `track_index` of a clip to `node` in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBinding {
    pub track_index: usize,
    pub node: NodeHandle,
    pub target: TargetPath,
}

/// A sampled value ready to be written to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Translation(Vec3),
    Rotation(Quat),
    Scale(Vec3),
}

/// The animated object a mixer drives.
///
/// Implemented by the scene graph; kept as a trait so this crate does not
/// depend on the scene representation.
pub trait AnimationTarget {
    /// Finds a node by name in the animated object's subtree.
    fn find_node(&self, name: &str) -> Option<NodeHandle>;

    /// Writes one sampled property. Unknown nodes are ignored.
    fn apply(&mut self, node: NodeHandle, value: TrackValue);
}

/// Resolves each track of `clip` to a node of `target`.
///
/// Tracks whose node cannot be found are left unbound and never sampled.
pub fn bind_clip(clip: &AnimationClip, target: &impl AnimationTarget) -> Vec<PropertyBinding> {
    let mut bindings = Vec::with_capacity(clip.tracks.len());

    for (track_index, track) in clip.tracks.iter().enumerate() {
        match target.find_node(&track.meta.node_name) {
            Some(node) => bindings.push(PropertyBinding {
                track_index,
                node,
                target: track.meta.target,
            }),
            None => log::debug!(
                "Clip '{}': no node named '{}', track {track_index} left unbound",
                clip.name,
                track.meta.node_name
            ),
        }
    }

    bindings
}
