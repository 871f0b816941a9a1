//! Shared fixtures: a small embedded glTF document shaped like the Fox model.
//!
//! Scene nodes: `Fox` (a one-triangle mesh) and `Root`, whose child `Hip` is
//! the animated joint. Three one-second translation clips drive `Hip`, in
//! this order: `Survey` -> (0, 1, 0), `Walk` -> (1, 2, 3), `Run` -> (-1, 0, 0).

#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use glam::Vec3;
use serde_json::{Value, json};
use vixen::assets::{GltfLoader, Prefab};

pub const CLIP_NAMES: [&str; 3] = ["Survey", "Walk", "Run"];

/// End-of-clip `Hip` translation for each clip in [`CLIP_NAMES`].
pub const CLIP_TARGETS: [Vec3; 3] = [Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 0.0)];

fn push_floats(buffer: &mut Vec<u8>, values: &[f32]) -> (usize, usize) {
    let offset = buffer.len();
    for v in values {
        buffer.extend_from_slice(&v.to_le_bytes());
    }
    (offset, buffer.len() - offset)
}

fn buffer_view(offset: usize, length: usize) -> Value {
    json!({ "buffer": 0, "byteOffset": offset, "byteLength": length })
}

fn vec3_accessor(view: usize, count: usize, min: [f32; 3], max: [f32; 3]) -> Value {
    json!({
        "bufferView": view,
        "componentType": 5126,
        "count": count,
        "type": "VEC3",
        "min": min,
        "max": max
    })
}

/// The fixture document with its buffer embedded as a data URI.
pub fn fox_document() -> Vec<u8> {
    fox_document_with(json!({}))
}

/// Like [`fox_document`], with `extra` merged into the top-level object.
pub fn fox_document_with(extra: Value) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut views = Vec::new();
    let mut accessors = Vec::new();

    let (offset, length) = push_floats(&mut buffer, &[0.0, 1.0]);
    views.push(buffer_view(offset, length));
    accessors.push(json!({
        "bufferView": 0,
        "componentType": 5126,
        "count": 2,
        "type": "SCALAR",
        "min": [0.0],
        "max": [1.0]
    }));

    let (offset, length) = push_floats(&mut buffer, &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    views.push(buffer_view(offset, length));
    accessors.push(vec3_accessor(1, 3, [0.0, 0.0, 0.0], [1.0, 1.0, 0.0]));

    let mut animations = Vec::new();
    for (name, end) in CLIP_NAMES.iter().zip(CLIP_TARGETS) {
        let (offset, length) = push_floats(&mut buffer, &[0.0, 0.0, 0.0, end.x, end.y, end.z]);
        let view = views.len();
        views.push(buffer_view(offset, length));
        let accessor = accessors.len();
        accessors.push(vec3_accessor(view, 2, end.min(Vec3::ZERO).to_array(), end.max(Vec3::ZERO).to_array()));

        animations.push(json!({
            "name": name,
            "samplers": [{ "input": 0, "output": accessor, "interpolation": "LINEAR" }],
            "channels": [{ "sampler": 0, "target": { "node": 2, "path": "translation" } }]
        }));
    }

    let uri = format!("data:application/octet-stream;base64,{}", STANDARD.encode(&buffer));

    let mut document = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0, 1] }],
        "nodes": [
            { "name": "Fox", "mesh": 0 },
            { "name": "Root", "children": [2] },
            { "name": "Hip" }
        ],
        "meshes": [{ "name": "fox", "primitives": [{ "attributes": { "POSITION": 1 } }] }],
        "animations": animations,
        "accessors": accessors,
        "bufferViews": views,
        "buffers": [{ "byteLength": buffer.len(), "uri": uri }]
    });

    if let (Some(target), Value::Object(extra)) = (document.as_object_mut(), extra) {
        target.extend(extra);
    }

    serde_json::to_vec(&document).expect("fixture serializes")
}

pub fn fox_prefab() -> Prefab {
    GltfLoader::default()
        .decode(&fox_document(), None, "fixture")
        .expect("fixture decodes")
}

pub fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}
