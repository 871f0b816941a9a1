//! Asset Loader
//!
//! Decodes glTF models off the loop thread into a scene-independent
//! [`Prefab`] and hands it back through a one-shot [`LoadHandle`].

pub mod gltf_loader;
pub mod loader;
pub mod prefab;

pub use gltf_loader::GltfLoader;
pub use loader::{DEFAULT_DRACO_DECODER_PATH, LoadHandle, LoaderSettings};
pub use prefab::{Prefab, PrefabNode, PrefabSkeleton, SharedPrefab};
