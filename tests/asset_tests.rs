//! Asset Loading Tests
//!
//! Tests for:
//! - GltfLoader::decode: node hierarchy, mesh summary, clip names and durations
//! - Prefab::instantiate: naming, parenting, animation binding against the scene
//! - Draco-compressed documents are rejected with a clear error
//! - Missing files: load_sync reports NotFound, load() stays pending
//! - Background load of a file on disk is delivered exactly once

mod common;

use std::time::{Duration, Instant};

use common::{CLIP_NAMES, fox_document, fox_document_with, fox_prefab};
use serde_json::json;
use vixen::animation::AnimationTarget;
use vixen::assets::{DEFAULT_DRACO_DECODER_PATH, GltfLoader, LoaderSettings};
use vixen::scene::{Geometry, Scene};
use vixen::{AssetError, Error};

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decode_reads_nodes_and_roots() {
    let prefab = fox_prefab();

    let names: Vec<&str> = prefab.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Fox", "Root", "Hip"]);
    assert_eq!(prefab.root_indices, [0, 1]);
    assert_eq!(prefab.nodes[1].children_indices, [2]);
}

#[test]
fn decode_summarizes_meshes() {
    let prefab = fox_prefab();

    let mesh = prefab.nodes[0].mesh.as_ref().expect("Fox has a mesh");
    match mesh.geometry {
        Geometry::Imported { vertex_count, skinned, .. } => {
            assert_eq!(vertex_count, 3);
            assert!(!skinned);
        }
        Geometry::Plane { .. } => panic!("expected imported geometry"),
    }
    assert!(prefab.nodes[2].mesh.is_none());
}

#[test]
fn decode_keeps_clip_order_and_duration() {
    let prefab = fox_prefab();

    assert_eq!(prefab.clip_names(), CLIP_NAMES);
    for clip in &prefab.animations {
        assert!((clip.duration - 1.0).abs() < 1e-6, "{} lasts {}", clip.name, clip.duration);
        assert_eq!(clip.tracks.len(), 1);
        assert_eq!(clip.tracks[0].meta.node_name, "Hip");
    }
}

#[test]
fn unnamed_animations_get_index_names() {
    let mut document: serde_json::Value = serde_json::from_slice(&fox_document()).unwrap();
    for anim in document["animations"].as_array_mut().unwrap() {
        anim.as_object_mut().unwrap().remove("name");
    }
    let bytes = serde_json::to_vec(&document).unwrap();

    let prefab = GltfLoader::default().decode(&bytes, None, "unnamed").unwrap();
    assert_eq!(prefab.clip_names(), ["animation_0", "animation_1", "animation_2"]);
}

#[test]
fn draco_documents_are_rejected() {
    let bytes = fox_document_with(json!({
        "extensionsUsed": ["KHR_draco_mesh_compression"],
        "extensionsRequired": ["KHR_draco_mesh_compression"]
    }));

    let loader = GltfLoader::new(LoaderSettings {
        draco_decoder_path: DEFAULT_DRACO_DECODER_PATH.to_string(),
    });
    let err = loader.decode(&bytes, None, "Fox.gltf").unwrap_err();

    assert!(matches!(
        err,
        Error::Asset(AssetError::UnsupportedExtension { ref extension, .. })
            if extension == "KHR_draco_mesh_compression"
    ));
}

fn assert_malformed(document: &serde_json::Value) {
    let bytes = serde_json::to_vec(document).unwrap();
    let err = GltfLoader::default().decode(&bytes, None, "Fox.gltf").unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::MalformedData { .. })), "{err:?}");
}

#[test]
fn linear_sampler_with_too_few_outputs_is_malformed() {
    let mut document: serde_json::Value = serde_json::from_slice(&fox_document()).unwrap();
    let output = document["animations"][0]["samplers"][0]["output"].as_u64().unwrap() as usize;
    document["accessors"][output]["count"] = json!(1);

    assert_malformed(&document);
}

#[test]
fn cubic_sampler_needs_three_outputs_per_key() {
    let mut document: serde_json::Value = serde_json::from_slice(&fox_document()).unwrap();
    document["animations"][0]["samplers"][0]["interpolation"] = json!("CUBICSPLINE");

    assert_malformed(&document);
}

#[test]
fn garbage_bytes_are_a_gltf_error() {
    let err = GltfLoader::default().decode(b"not a gltf", None, "junk").unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::Gltf(_))));
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn instantiate_builds_named_hierarchy() {
    let prefab = fox_prefab();
    let mut scene = Scene::new();

    let root = prefab.instantiate(&mut scene);

    assert_eq!(scene.name(root), Some("prefab_root"));
    let children = scene.get_node(root).unwrap().children().to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(scene.name(children[0]), Some("Fox"));
    assert!(scene.meshes.contains_key(children[0]));

    let hip = scene.find_in_subtree(root, "Hip").unwrap();
    assert_eq!(scene.get_node(hip).unwrap().parent(), Some(children[1]));
}

#[test]
fn animation_binding_is_scoped_to_the_model() {
    let prefab = fox_prefab();
    let mut scene = Scene::new();
    let first = prefab.instantiate(&mut scene);
    let second = prefab.instantiate(&mut scene);

    scene.animation_root = Some(second);
    let hip = scene.find_node("Hip").unwrap();

    assert!(scene.find_in_subtree(second, "Hip") == Some(hip));
    assert!(scene.find_in_subtree(first, "Hip") != Some(hip));
}

// ============================================================================
// Loading from disk
// ============================================================================

#[test]
fn missing_file_is_not_found() {
    let loader = GltfLoader::default();
    let err = loader.load_sync("does/not/exist/Fox.gltf").unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::NotFound(_))));
}

#[test]
fn failed_background_load_stays_pending() {
    let loader = GltfLoader::default();
    let mut handle = loader.load("does/not/exist/Fox.gltf");

    for _ in 0..20 {
        assert!(handle.poll().is_none());
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!handle.is_delivered());
}

#[test]
fn background_load_delivers_once() {
    let dir = std::env::temp_dir().join(format!("vixen-asset-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("Fox.gltf");
    std::fs::write(&path, fox_document()).unwrap();

    let mut handle = GltfLoader::default().load(&path);

    let deadline = Instant::now() + Duration::from_secs(10);
    let prefab = loop {
        if let Some(prefab) = handle.poll() {
            break prefab;
        }
        assert!(Instant::now() < deadline, "load did not finish");
        std::thread::sleep(Duration::from_millis(5));
    };

    assert_eq!(prefab.clip_names(), CLIP_NAMES);
    assert!(handle.is_delivered());
    assert!(handle.poll().is_none());

    let _ = std::fs::remove_dir_all(&dir);
}
