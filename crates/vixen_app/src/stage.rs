//! Static scene content around the model: floor, lights and camera.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use vixen_core::NodeHandle;
use vixen_scene::{Camera, Geometry, Light, Mesh, Scene, ShadowConfig, StandardMaterial, color_from_hex};

use crate::config::ViewerConfig;

pub const FLOOR_SIZE: f32 = 10.0;
pub const FLOOR_COLOR: u32 = 0x44_44_44;
pub const AMBIENT_INTENSITY: f32 = 2.4;
pub const DIRECTIONAL_INTENSITY: f32 = 1.8;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const SHADOW_MAP_SIZE: u32 = 1024;
pub const SHADOW_CAMERA_EXTENT: f32 = 7.0;
pub const SHADOW_CAMERA_FAR: f32 = 15.0;

#[derive(Debug, Clone, Copy)]
pub struct StageNodes {
    pub floor: NodeHandle,
    pub ambient_light: NodeHandle,
    pub directional_light: NodeHandle,
    pub camera: NodeHandle,
}

pub fn build_stage(scene: &mut Scene, config: &ViewerConfig, aspect: f32) -> StageNodes {
    let mut floor_mesh = Mesh::new(
        Geometry::Plane {
            width: FLOOR_SIZE,
            height: FLOOR_SIZE,
        },
        StandardMaterial {
            color: color_from_hex(FLOOR_COLOR),
            metalness: 0.0,
            roughness: 0.5,
        },
    );
    floor_mesh.receive_shadows = true;
    let floor = scene.add_mesh(floor_mesh);
    scene.set_name(floor, "floor");
    if let Some(node) = scene.get_node_mut(floor) {
        node.transform.set_rotation_euler(-FRAC_PI_2, 0.0, 0.0);
    }

    let ambient_light = scene.add_light(Light::new_ambient(Vec3::ONE, AMBIENT_INTENSITY));
    scene.set_name(ambient_light, "ambient_light");

    let mut sun = Light::new_directional(Vec3::ONE, DIRECTIONAL_INTENSITY);
    sun.cast_shadows = true;
    sun.shadow = Some(
        ShadowConfig::default()
            .with_map_size(SHADOW_MAP_SIZE)
            .with_extent(SHADOW_CAMERA_EXTENT)
            .with_far(SHADOW_CAMERA_FAR),
    );
    let directional_light = scene.add_light(sun);
    scene.set_name(directional_light, "directional_light");
    if let Some(node) = scene.get_node_mut(directional_light) {
        node.transform.position = DIRECTIONAL_POSITION;
        node.transform.look_at(Vec3::ZERO, Vec3::Y);
    }

    let cam = &config.camera;
    let camera = scene.add_camera(Camera::new_perspective(cam.fov, aspect, cam.near, cam.far));
    scene.set_name(camera, "camera");
    scene.active_camera = Some(camera);
    if let Some(node) = scene.get_node_mut(camera) {
        node.transform.position = config.camera_position();
        node.transform.look_at(config.orbit_target(), Vec3::Y);
    }

    StageNodes {
        floor,
        ambient_light,
        directional_light,
        camera,
    }
}
