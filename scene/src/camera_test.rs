#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Defaults ---

#[test]
fn default_camera_uses_panel_frustum() {
    let cam = PerspectiveCamera::default();
    assert_eq!(cam.fov_y_deg, 75.0);
    assert_eq!(cam.near, 0.1);
    assert_eq!(cam.far, 1000.0);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn new_camera_sits_on_positive_z() {
    let cam = PerspectiveCamera::new(1.5, 50.0);
    assert!(vec_approx_eq(cam.eye(), Vec3::new(0.0, 0.0, 50.0)));
    assert_eq!(cam.aspect, 1.5);
}

// --- Distance ---

#[test]
fn set_distance_clamps_into_range() {
    let mut cam = PerspectiveCamera::new(1.0, 50.0);
    cam.set_distance_clamped(5.0, &(10.0..=100.0));
    assert_eq!(cam.distance, 10.0);
    cam.set_distance_clamped(250.0, &(10.0..=100.0));
    assert_eq!(cam.distance, 100.0);
    cam.set_distance_clamped(42.0, &(10.0..=100.0));
    assert_eq!(cam.distance, 42.0);
}

#[test]
fn eye_distance_matches_distance_after_rotation() {
    let mut cam = PerspectiveCamera::new(1.0, 30.0);
    cam.rotate(0.7, -0.4);
    assert!(approx_eq(cam.eye().length(), 30.0));
}

// --- Rotation ---

#[test]
fn rotate_azimuth_quarter_turn_moves_eye_to_positive_x() {
    let mut cam = PerspectiveCamera::new(1.0, 10.0);
    cam.rotate(FRAC_PI_2, 0.0);
    assert!(vec_approx_eq(cam.eye(), Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn rotate_clamps_polar_off_the_poles() {
    let mut cam = PerspectiveCamera::new(1.0, 10.0);
    cam.rotate(0.0, -10.0);
    assert!(cam.polar > 0.0);
    cam.rotate(0.0, 20.0);
    assert!(cam.polar < std::f32::consts::PI);
}

// --- Matrices ---

#[test]
fn target_projects_to_clip_center() {
    let cam = PerspectiveCamera::new(16.0 / 9.0, 25.0);
    let clip = cam.view_projection() * Vec3::ZERO.extend(1.0);
    assert!(clip.w > 0.0);
    assert!(approx_eq(clip.x / clip.w, 0.0));
    assert!(approx_eq(clip.y / clip.w, 0.0));
}

#[test]
fn point_behind_camera_has_negative_w() {
    let cam = PerspectiveCamera::new(1.0, 10.0);
    let clip = cam.view_projection() * Vec3::new(0.0, 0.0, 20.0).extend(1.0);
    assert!(clip.w < 0.0);
}
