//! Orbit Controls Tests
//!
//! Tests for:
//! - Initial orbit state reproduces the configured camera position
//! - Damping: rotation eases in, settles, and is frame-rate independent
//! - Zoom is clamped to [min_distance, max_distance]
//! - Polar angle never flips over the poles
//! - Camera transform always looks at the target

use glam::Vec3;
use vixen::app::OrbitControls;
use vixen::core::Input;
use vixen::scene::Transform;

const EPSILON: f32 = 1e-4;

fn stock_controls() -> OrbitControls {
    OrbitControls::from_position(Vec3::new(2.0, 2.0, 2.0), Vec3::new(0.0, 0.75, 0.0))
}

fn idle_input() -> Input {
    let mut input = Input::new();
    input.inject_resize(800, 600);
    input
}

fn run(controls: &mut OrbitControls, frames: usize, dt: f32) -> Transform {
    let input = idle_input();
    let mut transform = Transform::new();
    for _ in 0..frames {
        controls.update(&mut transform, &input, 75.0, dt);
    }
    transform
}

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn idle_update_keeps_the_camera_in_place() {
    let mut controls = stock_controls();
    let transform = run(&mut controls, 10, 1.0 / 60.0);

    assert!((transform.position - Vec3::new(2.0, 2.0, 2.0)).length() < EPSILON);
    assert!((controls.target - Vec3::new(0.0, 0.75, 0.0)).length() < EPSILON);
}

#[test]
fn camera_faces_the_target() {
    let mut controls = stock_controls();
    let transform = run(&mut controls, 1, 1.0 / 60.0);

    let forward = transform.rotation * Vec3::NEG_Z;
    let to_target = (controls.target - transform.position).normalize();
    assert!(forward.dot(to_target) > 1.0 - EPSILON);
}

// ============================================================================
// Damping
// ============================================================================

#[test]
fn damped_rotation_eases_in_and_settles() {
    let mut controls = stock_controls();
    let theta0 = controls.theta;
    controls.rotate(1.0, 0.0);

    run(&mut controls, 1, 1.0 / 60.0);
    let after_one = controls.theta - theta0;
    assert!(after_one > 0.0 && after_one < 0.1);

    run(&mut controls, 600, 1.0 / 60.0);
    assert!((controls.theta - theta0 - 1.0).abs() < 1e-3);
    assert!(controls.pending_rotation().length() < 1e-3);
}

#[test]
fn damping_is_frame_rate_independent() {
    let mut at_60 = stock_controls();
    let mut at_30 = stock_controls();
    at_60.rotate(0.8, 0.0);
    at_30.rotate(0.8, 0.0);

    run(&mut at_60, 60, 1.0 / 60.0);
    run(&mut at_30, 30, 1.0 / 30.0);

    assert!((at_60.theta - at_30.theta).abs() < EPSILON);
}

#[test]
fn undamped_rotation_applies_at_once() {
    let mut controls = stock_controls();
    controls.enable_damping = false;
    let theta0 = controls.theta;

    controls.rotate(0.5, 0.0);
    run(&mut controls, 1, 1.0 / 60.0);

    assert!((controls.theta - theta0 - 0.5).abs() < EPSILON);
}

#[test]
fn polar_angle_is_clamped() {
    let mut controls = stock_controls();
    controls.enable_damping = false;

    controls.rotate(0.0, -10.0);
    let transform = run(&mut controls, 1, 1.0 / 60.0);

    assert!(controls.phi > 0.0);
    assert!(transform.position.y > controls.target.y);
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn zoom_is_clamped_to_distance_limits() {
    let mut controls = stock_controls();
    let mut transform = Transform::new();

    let mut input = idle_input();
    for _ in 0..200 {
        input.inject_scroll(0.0, 10.0);
        controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
        input.start_frame();
    }
    assert!((controls.radius - controls.min_distance).abs() < EPSILON);

    for _ in 0..200 {
        input.inject_scroll(0.0, -10.0);
        controls.update(&mut transform, &input, 75.0, 1.0 / 60.0);
        input.start_frame();
    }
    assert!((controls.radius - controls.max_distance).abs() < EPSILON);
    assert!(((transform.position - controls.target).length() - controls.max_distance).abs() < 1e-3);
}
