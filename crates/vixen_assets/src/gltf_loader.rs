use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use glam::{Affine3A, Mat4, Quat, Vec3};
use gltf::animation::util::ReadOutputs;
use vixen_animation::{AnimationClip, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData, TrackMeta};
use vixen_core::{AssetError, Error, Result};
use vixen_scene::{Geometry, Mesh, StandardMaterial, Transform};

use crate::loader::{LoadHandle, LoaderSettings};
use crate::prefab::{Prefab, PrefabNode, PrefabSkeleton, SharedPrefab};

const DRACO_EXTENSION: &str = "KHR_draco_mesh_compression";

#[cfg(not(target_arch = "wasm32"))]
fn asset_runtime() -> Option<&'static tokio::runtime::Runtime> {
    use std::sync::OnceLock;

    static RUNTIME: OnceLock<Option<tokio::runtime::Runtime>> = OnceLock::new();
    RUNTIME
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .thread_name("vixen-assets")
                .build()
                .map_err(|e| log::error!("Failed to create asset loader runtime: {e}"))
                .ok()
        })
        .as_ref()
}

/// glTF 2.0 (`.gltf` and `.glb`) to [`Prefab`].
#[derive(Debug, Clone, Default)]
pub struct GltfLoader {
    settings: LoaderSettings,
}

impl GltfLoader {
    #[must_use]
    pub fn new(settings: LoaderSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Starts decoding `path` in the background.
    ///
    /// Failures are logged and leave the handle pending.
    pub fn load(&self, path: impl AsRef<Path>) -> LoadHandle<SharedPrefab> {
        let path = path.as_ref().to_path_buf();
        let (tx, handle) = LoadHandle::channel();
        let loader = self.clone();

        let job = move || {
            log::info!("Loading model {}", path.display());
            match loader.load_sync(&path) {
                Ok(prefab) => {
                    log::info!(
                        "Loaded {} ({} nodes, {} clips)",
                        path.display(),
                        prefab.nodes.len(),
                        prefab.animations.len()
                    );
                    if tx.send(Arc::new(prefab)).is_err() {
                        log::debug!("Load handle for {} dropped before completion", path.display());
                    }
                }
                Err(e) => log::error!("Failed to load {}: {e}", path.display()),
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            match asset_runtime() {
                Some(rt) => {
                    rt.spawn_blocking(job);
                }
                None => job(),
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            job();
        }

        handle
    }

    /// Reads and decodes `path` on the calling thread.
    pub fn load_sync(&self, path: impl AsRef<Path>) -> Result<Prefab> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::Asset(AssetError::NotFound(path.display().to_string())),
            _ => Error::IoError(e),
        })?;
        self.decode(&bytes, path.parent(), &path.display().to_string())
    }

    /// Decodes an in-memory document. External buffers resolve against `base`.
    pub fn decode(&self, bytes: &[u8], base: Option<&Path>, label: &str) -> Result<Prefab> {
        let unchecked = gltf::Gltf::from_slice_without_validation(bytes).map_err(gltf_error)?;
        if unchecked.extensions_required().any(|ext| ext == DRACO_EXTENSION) {
            log::warn!(
                "{label} requires {DRACO_EXTENSION}; no decoder is available at '{}'",
                self.settings.draco_decoder_path
            );
            return Err(AssetError::UnsupportedExtension {
                extension: DRACO_EXTENSION.to_string(),
                path: label.to_string(),
            }
            .into());
        }

        let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes).map_err(gltf_error)?;
        let buffers: Vec<Vec<u8>> = gltf::import_buffers(&document, base, blob)
            .map_err(gltf_error)?
            .into_iter()
            .map(|data| data.0)
            .collect();

        Ok(Prefab {
            nodes: read_nodes(&document, &buffers),
            root_indices: root_indices(&document),
            skeletons: read_skins(&document, &buffers),
            animations: read_animations(&document, &buffers)?,
        })
    }
}

fn gltf_error(e: gltf::Error) -> Error {
    AssetError::Gltf(e.to_string()).into()
}

fn node_name(node: &gltf::Node) -> String {
    node.name()
        .map_or_else(|| format!("node_{}", node.index()), str::to_string)
}

fn read_nodes(document: &gltf::Document, buffers: &[Vec<u8>]) -> Vec<PrefabNode> {
    document
        .nodes()
        .map(|node| {
            let (t, r, s) = node.transform().decomposed();
            PrefabNode {
                name: node_name(&node),
                transform: Transform::from_trs(Vec3::from_array(t), Quat::from_array(r), Vec3::from_array(s)),
                children_indices: node.children().map(|c| c.index()).collect(),
                mesh: node.mesh().map(|m| mesh_summary(&m, buffers)),
                skin_index: node.skin().map(|s| s.index()),
            }
        })
        .collect()
}

fn mesh_summary(mesh: &gltf::Mesh, buffers: &[Vec<u8>]) -> Mesh {
    let mut vertex_count = 0;
    let mut index_count = 0;
    let mut skinned = false;
    let mut material = StandardMaterial::default();

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|b| Some(&buffers[b.index()][..]));
        vertex_count += reader.read_positions().map_or(0, Iterator::count);
        index_count += reader.read_indices().map_or(0, |i| i.into_u32().count());
        skinned |= reader.read_joints(0).is_some();

        let pbr = primitive.material().pbr_metallic_roughness();
        let [r, g, b, _] = pbr.base_color_factor();
        material = StandardMaterial {
            color: Vec3::new(r, g, b),
            metalness: pbr.metallic_factor(),
            roughness: pbr.roughness_factor(),
        };
    }

    let mut summary = Mesh::new(
        Geometry::Imported {
            vertex_count,
            index_count,
            skinned,
        },
        material,
    );
    summary.receive_shadows = true;
    summary
}

/// Nodes of the default scene, or every node nobody lists as a child.
fn root_indices(document: &gltf::Document) -> Vec<usize> {
    if let Some(scene) = document.default_scene().or_else(|| document.scenes().next()) {
        return scene.nodes().map(|n| n.index()).collect();
    }

    let children: HashSet<usize> = document
        .nodes()
        .flat_map(|n| n.children().map(|c| c.index()).collect::<Vec<_>>())
        .collect();
    document
        .nodes()
        .map(|n| n.index())
        .filter(|i| !children.contains(i))
        .collect()
}

fn read_skins(document: &gltf::Document, buffers: &[Vec<u8>]) -> Vec<PrefabSkeleton> {
    document
        .skins()
        .map(|skin| {
            let reader = skin.reader(|b| Some(&buffers[b.index()][..]));
            let inverse_bind_matrices = reader
                .read_inverse_bind_matrices()
                .map(|iter| {
                    iter.map(|m| Affine3A::from_mat4(Mat4::from_cols_array_2d(&m)))
                        .collect()
                })
                .unwrap_or_default();

            PrefabSkeleton {
                name: skin.name().unwrap_or("skeleton").to_string(),
                bone_indices: skin.joints().map(|j| j.index()).collect(),
                inverse_bind_matrices,
            }
        })
        .collect()
}

fn read_animations(document: &gltf::Document, buffers: &[Vec<u8>]) -> Result<Vec<Arc<AnimationClip>>> {
    let mut clips = Vec::new();

    for anim in document.animations() {
        let mut tracks = Vec::new();

        for (channel_index, channel) in anim.channels().enumerate() {
            let reader = channel.reader(|b| Some(&buffers[b.index()][..]));
            let node_name = node_name(&channel.target().node());

            let times: Vec<f32> = reader
                .read_inputs()
                .ok_or_else(|| AssetError::MalformedData {
                    context: format!("animation {} channel {} has no input times", anim.index(), channel_index),
                })?
                .collect();

            let interpolation = match channel.sampler().interpolation() {
                gltf::animation::Interpolation::Linear => InterpolationMode::Linear,
                gltf::animation::Interpolation::Step => InterpolationMode::Step,
                gltf::animation::Interpolation::CubicSpline => InterpolationMode::CubicSpline,
            };

            let (target, data) = match reader.read_outputs() {
                Some(ReadOutputs::Translations(iter)) => (
                    TargetPath::Translation,
                    TrackData::Vector3(KeyframeTrack::new(times, iter.map(Vec3::from_array).collect(), interpolation)),
                ),
                Some(ReadOutputs::Rotations(iter)) => (
                    TargetPath::Rotation,
                    TrackData::Quaternion(KeyframeTrack::new(
                        times,
                        iter.into_f32().map(Quat::from_array).collect(),
                        interpolation,
                    )),
                ),
                Some(ReadOutputs::Scales(iter)) => (
                    TargetPath::Scale,
                    TrackData::Vector3(KeyframeTrack::new(times, iter.map(Vec3::from_array).collect(), interpolation)),
                ),
                Some(ReadOutputs::MorphTargetWeights(_)) => {
                    log::debug!("Skipping morph weight track on '{node_name}'");
                    continue;
                }
                None => {
                    return Err(AssetError::MalformedData {
                        context: format!("animation {} channel {} has no output values", anim.index(), channel_index),
                    }
                    .into());
                }
            };

            let (keyframes, expected, actual) = data.value_counts();
            if actual != expected {
                return Err(AssetError::MalformedData {
                    context: format!(
                        "animation {} channel {} has {actual} output values for {keyframes} keyframes, expected {expected}",
                        anim.index(),
                        channel_index
                    ),
                }
                .into());
            }

            tracks.push(Track {
                meta: TrackMeta { node_name, target },
                data,
            });
        }

        let name = anim
            .name()
            .map_or_else(|| format!("animation_{}", anim.index()), str::to_string);
        clips.push(Arc::new(AnimationClip::new(name, tracks)));
    }

    Ok(clips)
}
