//! World matrix propagation.
//!
//! Borrows only the node store and the camera components, not the whole
//! scene, so callers can hold other scene parts at the same time.

use glam::Affine3A;
use slotmap::{SecondaryMap, SlotMap};
use vixen_core::NodeHandle;

use crate::camera::Camera;
use crate::node::Node;

/// Depth-first update with an explicit stack. A node's world matrix is
/// recomputed when its own TRS changed or any ancestor's did.
pub fn update_hierarchy(
    nodes: &mut SlotMap<NodeHandle, Node>,
    cameras: &mut SecondaryMap<NodeHandle, Camera>,
    roots: &[NodeHandle],
) {
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);
    for &root in roots.iter().rev() {
        stack.push((root, Affine3A::IDENTITY, false));
    }

    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_changed = local_changed || parent_changed;

        if world_changed {
            let world = parent_world * node.transform.local_matrix;
            node.transform.set_world_matrix(world);

            if let Some(camera) = cameras.get_mut(handle) {
                camera.update_view_projection(&world);
            }
        }

        let world = node.transform.world_matrix;
        for &child in node.children.iter().rev() {
            stack.push((child, world, world_changed));
        }
    }
}
