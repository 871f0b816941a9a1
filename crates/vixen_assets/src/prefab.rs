use std::sync::Arc;

use glam::Affine3A;
use vixen_animation::AnimationClip;
use vixen_core::NodeHandle;
use vixen_scene::{Mesh, Node, Scene, Skeleton, Transform};

/// One decoded node. Children refer to positions in [`Prefab::nodes`].
#[derive(Debug, Clone, Default)]
pub struct PrefabNode {
    pub name: String,
    pub transform: Transform,
    pub children_indices: Vec<usize>,
    pub mesh: Option<Mesh>,
    /// Position in [`Prefab::skeletons`].
    pub skin_index: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct PrefabSkeleton {
    pub name: String,
    /// Positions in [`Prefab::nodes`], in joint order.
    pub bone_indices: Vec<usize>,
    pub inverse_bind_matrices: Vec<Affine3A>,
}

/// Decoded model, independent of any scene.
///
/// Holds no handles, so it can cross from the loader thread to the loop
/// thread and be instantiated any number of times.
#[derive(Debug, Clone, Default)]
pub struct Prefab {
    pub nodes: Vec<PrefabNode>,
    pub root_indices: Vec<usize>,
    pub skeletons: Vec<PrefabSkeleton>,
    pub animations: Vec<Arc<AnimationClip>>,
}

pub type SharedPrefab = Arc<Prefab>;

impl Prefab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn clip_names(&self) -> Vec<&str> {
        self.animations.iter().map(|c| c.name.as_str()).collect()
    }

    /// Creates the prefab's nodes under a new root node and returns the root.
    ///
    /// Skinned nodes get their skeleton registered in the scene with bone
    /// handles resolved to the new nodes.
    pub fn instantiate(&self, scene: &mut Scene) -> NodeHandle {
        let root = scene.add_node(Node::new());
        scene.set_name(root, "prefab_root");

        let handles: Vec<NodeHandle> = self
            .nodes
            .iter()
            .map(|pn| {
                let handle = scene.nodes.insert(Node::with_transform(pn.transform.clone()));
                scene.set_name(handle, pn.name.clone());
                if let Some(mesh) = &pn.mesh {
                    scene.meshes.insert(handle, mesh.clone());
                }
                handle
            })
            .collect();

        for (index, pn) in self.nodes.iter().enumerate() {
            for &child in &pn.children_indices {
                if let Some(&child_handle) = handles.get(child) {
                    scene.attach(child_handle, handles[index]);
                }
            }
        }
        for &index in &self.root_indices {
            if let Some(&handle) = handles.get(index) {
                scene.attach(handle, root);
            }
        }

        let skeleton_keys: Vec<_> = self
            .skeletons
            .iter()
            .map(|ps| {
                let bones = ps.bone_indices.iter().filter_map(|&i| handles.get(i).copied()).collect();
                scene.add_skeleton(Skeleton::new(&ps.name, bones, ps.inverse_bind_matrices.clone()))
            })
            .collect();

        for (index, pn) in self.nodes.iter().enumerate() {
            if let Some(&key) = pn.skin_index.and_then(|s| skeleton_keys.get(s)) {
                scene.skins.insert(handles[index], key);
            }
        }

        root
    }
}
