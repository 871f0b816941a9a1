use glam::Vec3;

/// Shape data a renderer would upload. Vertex buffers are not kept on the
/// CPU side; imported primitives only record their counts.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Plane { width: f32, height: f32 },
    Imported { vertex_count: usize, index_count: usize, skinned: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: StandardMaterial,
    pub cast_shadows: bool,
    pub receive_shadows: bool,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: Geometry, material: StandardMaterial) -> Self {
        Self {
            geometry,
            material,
            cast_shadows: false,
            receive_shadows: false,
        }
    }
}
