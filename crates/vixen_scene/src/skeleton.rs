use glam::{Affine3A, Mat4};
use slotmap::SlotMap;
use vixen_core::NodeHandle;

use crate::node::Node;

/// Joints of a skinned mesh and their inverse bind matrices.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub name: String,
    /// `bones[i]` drives joint `i` of the skinned vertices.
    pub bones: Vec<NodeHandle>,
    pub(crate) inverse_bind_matrices: Vec<Affine3A>,
    pub(crate) joint_matrices: Vec<Mat4>,
}

impl Skeleton {
    /// Missing inverse bind matrices default to identity.
    #[must_use]
    pub fn new(name: &str, bones: Vec<NodeHandle>, mut inverse_bind_matrices: Vec<Affine3A>) -> Self {
        let count = bones.len();
        inverse_bind_matrices.resize(count, Affine3A::IDENTITY);
        Self {
            name: name.to_string(),
            bones,
            inverse_bind_matrices,
            joint_matrices: vec![Mat4::IDENTITY; count],
        }
    }

    #[must_use]
    pub fn joint_matrices(&self) -> &[Mat4] {
        &self.joint_matrices
    }

    /// `joint[i] = root_inv * world(bone[i]) * inverse_bind[i]`
    pub fn compute_joint_matrices(&mut self, nodes: &SlotMap<NodeHandle, Node>, root_inv: Affine3A) {
        for (i, &bone) in self.bones.iter().enumerate() {
            let world = nodes.get(bone).map_or(Affine3A::IDENTITY, |n| n.transform.world_matrix);
            self.joint_matrices[i] = Mat4::from(root_inv * world * self.inverse_bind_matrices[i]);
        }
    }
}
