//! Scene graph store
//!
//! Nodes live in a slotmap and carry only hierarchy and transform. Names,
//! meshes, cameras, lights and skins are component maps on [`Scene`].
//! The scene implements [`vixen_animation::AnimationTarget`] so a mixer can
//! write poses straight into node transforms.

pub mod camera;
pub mod light;
pub mod mesh;
pub mod node;
pub mod scene;
pub mod skeleton;
pub mod transform;
pub mod transform_system;

pub use camera::Camera;
pub use light::{Light, LightKind, ShadowConfig, color_from_hex};
pub use mesh::{Geometry, Mesh, StandardMaterial};
pub use node::Node;
pub use scene::{Scene, SkeletonKey};
pub use skeleton::Skeleton;
pub use transform::Transform;
