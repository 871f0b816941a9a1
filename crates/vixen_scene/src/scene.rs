use glam::Vec4;
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use vixen_animation::{AnimationTarget, TrackValue};
use vixen_core::NodeHandle;

use crate::camera::Camera;
use crate::light::Light;
use crate::mesh::Mesh;
use crate::node::Node;
use crate::skeleton::Skeleton;
use crate::transform_system;

new_key_type! {
    pub struct SkeletonKey;
}

/// Node store plus per-node component maps.
///
/// Components are keyed by [`NodeHandle`]; removing a node removes its
/// components too.
#[derive(Debug)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub names: SecondaryMap<NodeHandle, String>,
    pub meshes: SecondaryMap<NodeHandle, Mesh>,
    pub cameras: SecondaryMap<NodeHandle, Camera>,
    pub lights: SecondaryMap<NodeHandle, Light>,
    pub skins: SecondaryMap<NodeHandle, SkeletonKey>,
    pub skeletons: SlotMap<SkeletonKey, Skeleton>,

    pub background: Vec4,
    pub active_camera: Option<NodeHandle>,
    /// Subtree searched when animation tracks are bound by node name.
    pub animation_root: Option<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            names: SecondaryMap::new(),
            meshes: SecondaryMap::new(),
            cameras: SecondaryMap::new(),
            lights: SecondaryMap::new(),
            skins: SecondaryMap::new(),
            skeletons: SlotMap::with_key(),
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
            active_camera: None,
            animation_root: None,
        }
    }

    /// Adds a root-level node.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds `child` under `parent`. An unknown parent makes it a root node.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        self.link(handle, parent);
        handle
    }

    /// Moves an existing node under `parent`.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself");
            return;
        }
        if !self.nodes.contains_key(child) {
            return;
        }

        let old_parent = self.nodes[child].parent;
        match old_parent {
            Some(old) => {
                if let Some(n) = self.nodes.get_mut(old) {
                    n.children.retain(|&c| c != child);
                }
            }
            None => self.root_nodes.retain(|&r| r != child),
        }

        self.link(child, parent);
    }

    fn link(&mut self, child: NodeHandle, parent: NodeHandle) {
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("Parent node not found, keeping node at the root");
            self.root_nodes.push(child);
            return;
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Removes a node, its subtree and all their components.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        let children = node.children.clone();
        let parent = node.parent;

        for child in children {
            self.remove_node(child);
        }

        match parent {
            Some(p) => {
                if let Some(n) = self.nodes.get_mut(p) {
                    n.children.retain(|&c| c != handle);
                }
            }
            None => self.root_nodes.retain(|&r| r != handle),
        }

        self.names.remove(handle);
        self.meshes.remove(handle);
        self.cameras.remove(handle);
        self.lights.remove(handle);
        self.skins.remove(handle);
        if self.active_camera == Some(handle) {
            self.active_camera = None;
        }
        self.nodes.remove(handle);
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: impl Into<String>) {
        if self.nodes.contains_key(handle) {
            self.names.insert(handle, name.into());
        }
    }

    #[must_use]
    pub fn name(&self, handle: NodeHandle) -> Option<&str> {
        self.names.get(handle).map(String::as_str)
    }

    /// Adds a camera node at the root. The first camera becomes active.
    pub fn add_camera(&mut self, camera: Camera) -> NodeHandle {
        let handle = self.add_node(Node::new());
        self.cameras.insert(handle, camera);
        if self.active_camera.is_none() {
            self.active_camera = Some(handle);
        }
        handle
    }

    pub fn add_light(&mut self, light: Light) -> NodeHandle {
        let handle = self.add_node(Node::new());
        self.lights.insert(handle, light);
        handle
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> NodeHandle {
        let handle = self.add_node(Node::new());
        self.meshes.insert(handle, mesh);
        handle
    }

    pub fn add_skeleton(&mut self, skeleton: Skeleton) -> SkeletonKey {
        self.skeletons.insert(skeleton)
    }

    /// The active camera's node and camera component.
    pub fn main_camera_bundle(&mut self) -> Option<(&mut Node, &mut Camera)> {
        let handle = self.active_camera?;
        let camera = self.cameras.get_mut(handle)?;
        let node = self.nodes.get_mut(handle)?;
        Some((node, camera))
    }

    #[must_use]
    pub fn main_camera(&self) -> Option<&Camera> {
        self.cameras.get(self.active_camera?)
    }

    pub fn iter_lights(&self) -> impl Iterator<Item = (NodeHandle, &Light)> {
        self.lights.iter()
    }

    /// Recomputes world matrices, then skeleton joint matrices.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &mut self.cameras, &self.root_nodes);
        self.update_skeletons();
    }

    fn update_skeletons(&mut self) {
        for (node_handle, &key) in &self.skins {
            let Some(node) = self.nodes.get(node_handle) else {
                continue;
            };
            let root_inv = node.transform.world_matrix.inverse();
            if let Some(skeleton) = self.skeletons.get_mut(key) {
                skeleton.compute_joint_matrices(&self.nodes, root_inv);
            }
        }
    }

    /// Depth-first search for `name` below `root`, `root` included.
    #[must_use]
    pub fn find_in_subtree(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            if self.name(handle) == Some(name) {
                return Some(handle);
            }
            if let Some(node) = self.nodes.get(handle) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        None
    }
}

impl AnimationTarget for Scene {
    fn find_node(&self, name: &str) -> Option<NodeHandle> {
        match self.animation_root {
            Some(root) => self.find_in_subtree(root, name),
            None => self.names.iter().find(|(_, n)| n.as_str() == name).map(|(h, _)| h),
        }
    }

    fn apply(&mut self, node: NodeHandle, value: TrackValue) {
        let Some(node) = self.nodes.get_mut(node) else {
            return;
        };
        match value {
            TrackValue::Translation(v) => node.transform.position = v,
            TrackValue::Rotation(q) => node.transform.rotation = q,
            TrackValue::Scale(v) => node.transform.scale = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Affine3A, Vec3};

    use super::*;
    use crate::transform::Transform;

    #[test]
    fn child_world_includes_parent() {
        let mut scene = Scene::new();
        let parent = scene.add_node(Node::with_transform(Transform::from_trs(
            Vec3::new(1.0, 0.0, 0.0),
            glam::Quat::IDENTITY,
            Vec3::splat(2.0),
        )));
        let child = scene.add_to_parent(
            Node::with_transform(Transform::from_trs(Vec3::new(0.0, 1.0, 0.0), glam::Quat::IDENTITY, Vec3::ONE)),
            parent,
        );

        scene.update_matrix_world();

        let world: Vec3 = scene.nodes[child].world_matrix().translation.into();
        assert!((world - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn find_node_is_scoped_to_animation_root() {
        let mut scene = Scene::new();
        let outside = scene.add_node(Node::new());
        scene.set_name(outside, "Hip");

        let root = scene.add_node(Node::new());
        let inside = scene.add_to_parent(Node::new(), root);
        scene.set_name(inside, "Hip");
        scene.animation_root = Some(root);

        assert_eq!(scene.find_node("Hip"), Some(inside));
    }

    #[test]
    fn remove_node_drops_subtree_and_components() {
        let mut scene = Scene::new();
        let root = scene.add_node(Node::new());
        let child = scene.add_to_parent(Node::new(), root);
        scene.set_name(child, "leaf");

        scene.remove_node(root);

        assert!(scene.nodes.is_empty());
        assert!(scene.root_nodes.is_empty());
        assert!(scene.name(child).is_none());
    }

    #[test]
    fn joint_matrix_is_identity_in_bind_pose() {
        let mut scene = Scene::new();
        let bone = scene.add_node(Node::with_transform(Transform::from_trs(
            Vec3::new(0.0, 3.0, 0.0),
            glam::Quat::IDENTITY,
            Vec3::ONE,
        )));
        let ibm = Affine3A::from_translation(Vec3::new(0.0, -3.0, 0.0));
        let key = scene.add_skeleton(Skeleton::new("rig", vec![bone], vec![ibm]));
        let skinned = scene.add_node(Node::new());
        scene.skins.insert(skinned, key);

        scene.update_matrix_world();

        let joint = scene.skeletons[key].joint_matrices()[0];
        assert!(joint.abs_diff_eq(glam::Mat4::IDENTITY, 1e-5));
    }
}
