#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn new_accepts_positive_sizes() {
    let vp = Viewport::new(640, 480).expect("positive viewport");
    assert_eq!(vp.width(), 640);
    assert_eq!(vp.height(), 480);
}

#[test]
fn new_rejects_zero_width() {
    let err = Viewport::new(0, 480).unwrap_err();
    assert!(matches!(err, SceneError::InvalidViewport { width: 0, height: 480 }));
}

#[test]
fn new_rejects_zero_height() {
    assert!(Viewport::new(640, 0).is_err());
}

#[test]
fn aspect_is_width_over_height() {
    let vp = Viewport::new(800, 400).expect("viewport");
    assert_eq!(vp.aspect(), 2.0);
}

#[test]
fn from_css_rounds_to_pixels() {
    let vp = Viewport::from_css(320.4, 199.6).expect("viewport");
    assert_eq!(vp, Viewport::new(320, 200).expect("viewport"));
}

#[test]
fn from_css_rejects_negative_and_nan() {
    assert!(Viewport::from_css(-10.0, 100.0).is_err());
    assert!(Viewport::from_css(100.0, f64::NAN).is_err());
    assert!(Viewport::from_css(f64::INFINITY, 100.0).is_err());
}

#[test]
fn from_css_rejects_sub_pixel() {
    assert!(Viewport::from_css(0.2, 100.0).is_err());
}
