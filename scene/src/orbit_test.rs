#![allow(clippy::float_cmp)]

use super::*;

fn camera() -> PerspectiveCamera {
    PerspectiveCamera::new(1.0, 50.0)
}

#[test]
fn new_controls_are_settled() {
    let controls = OrbitControls::new(true, 0.25);
    assert!(controls.is_settled());
}

#[test]
fn update_without_input_does_not_move_camera() {
    let mut controls = OrbitControls::new(true, 0.25);
    let mut cam = camera();
    assert!(!controls.update(&mut cam));
    assert_eq!(cam.azimuth, 0.0);
}

#[test]
fn undamped_update_applies_whole_drag() {
    let mut controls = OrbitControls::new(false, 0.25);
    let mut cam = camera();
    controls.drag(-100.0, 0.0, 400);
    assert!(controls.update(&mut cam));
    assert!((cam.azimuth - TAU / 4.0).abs() < 1e-5);
    assert!(controls.is_settled());
}

#[test]
fn damped_update_applies_fraction_then_decays() {
    let mut controls = OrbitControls::new(true, 0.25);
    let mut cam = camera();
    controls.drag(-100.0, 0.0, 400);
    controls.update(&mut cam);
    let quarter_turn = TAU / 4.0;
    assert!((cam.azimuth - quarter_turn * 0.25).abs() < 1e-5);
    controls.update(&mut cam);
    assert!((cam.azimuth - quarter_turn * (0.25 + 0.25 * 0.75)).abs() < 1e-5);
}

#[test]
fn damping_converges_toward_full_drag() {
    let mut controls = OrbitControls::new(true, 0.25);
    let mut cam = camera();
    controls.drag(-100.0, 0.0, 400);
    for _ in 0..200 {
        controls.update(&mut cam);
    }
    assert!(controls.is_settled());
    assert!((cam.azimuth - TAU / 4.0).abs() < 1e-3);
}

#[test]
fn vertical_drag_changes_polar() {
    let mut controls = OrbitControls::new(false, 0.25);
    let mut cam = camera();
    let before = cam.polar;
    controls.drag(0.0, 40.0, 400);
    controls.update(&mut cam);
    assert!(cam.polar < before);
}

#[test]
fn drag_ignores_degenerate_input() {
    let mut controls = OrbitControls::new(true, 0.25);
    controls.drag(10.0, 10.0, 0);
    controls.drag(f64::NAN, 1.0, 400);
    assert!(controls.is_settled());
}
