use std::f32::consts::PI;

use glam::{Vec2, Vec3};
use vixen_core::{Input, MouseButton};
use vixen_scene::Transform;

/// Keeps the polar angle off the poles, where `look_at` degenerates.
const POLAR_EPS: f32 = 0.0001;
const TARGET_FPS: f32 = 60.0;

/// Orbit camera around a target point.
///
/// Left drag rotates, right drag pans, wheel zooms. With damping on, a drag
/// keeps turning the camera for a while after release, decaying at the same
/// rate regardless of frame rate.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(target: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 0.5,
            max_distance: 50.0,

            target,
            radius,
            theta: 0.0,
            phi: PI / 2.0,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Orbit state that places the camera at `position`.
    #[must_use]
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let mut controls = Self::new(target, radius);
        if radius > f32::EPSILON {
            controls.theta = offset.x.atan2(offset.z);
            controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        }
        controls
    }

    /// Rotation still to be applied by damping.
    #[must_use]
    pub fn pending_rotation(&self) -> Vec2 {
        self.rotate_delta
    }

    /// Adds a rotation in radians, as a drag would.
    pub fn rotate(&mut self, delta_theta: f32, delta_phi: f32) {
        self.rotate_delta += Vec2::new(delta_theta, delta_phi);
    }

    /// Camera position implied by the current orbit state.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.target + spherical_direction(self.theta, self.phi) * self.radius
    }

    pub fn update(&mut self, transform: &mut Transform, input: &Input, fov_degrees: f32, dt: f32) {
        let screen_height = input.screen_size().y.max(1.0);
        let cursor = input.mouse_delta();

        if input.is_button_pressed(MouseButton::Left) {
            let rotate_per_pixel = 2.0 * PI / screen_height;
            self.rotate_delta -= cursor * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            let retention = (1.0 - self.damping_factor).powf(dt * TARGET_FPS);
            let applied = self.rotate_delta * (1.0 - retention);
            self.theta += applied.x;
            self.phi += applied.y;
            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        self.phi = self.phi.clamp(POLAR_EPS, PI - POLAR_EPS);

        let scroll = input.scroll_delta().y;
        if scroll != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(scroll.abs());
            if scroll > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
        }
        self.radius = self.radius.clamp(self.min_distance, self.max_distance);

        if input.is_button_pressed(MouseButton::Right) {
            let world_height = 2.0 * self.radius * (fov_degrees.to_radians() / 2.0).tan();
            let pixels_to_world = world_height / screen_height;

            let forward = -spherical_direction(self.theta, self.phi);
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward).normalize_or_zero();

            self.target += (right * -cursor.x + up * cursor.y) * pixels_to_world * self.pan_speed;
        }

        transform.position = self.eye();
        transform.look_at(self.target, Vec3::Y);
    }
}

fn spherical_direction(theta: f32, phi: f32) -> Vec3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
}
