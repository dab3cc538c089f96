//! Perspective camera orbiting a target, plus screen-space points.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f32::consts::FRAC_PI_2;
use std::ops::RangeInclusive;

use glam::{Mat4, Vec3};

use crate::consts::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, ORBIT_POLAR_EPSILON};

/// A point in screen space (CSS pixels, origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Perspective camera placed on a sphere around `target`.
///
/// `azimuth` rotates around +Y starting from +Z, `polar` is measured from +Y.
/// The default orientation (`azimuth = 0`, `polar = π/2`) looks down −Z from
/// `(0, 0, distance)`.
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            target: Vec3::ZERO,
            distance: 1.0,
            azimuth: 0.0,
            polar: FRAC_PI_2,
        }
    }
}

impl PerspectiveCamera {
    /// Camera at `distance` on +Z looking at the origin.
    #[must_use]
    pub fn new(aspect: f32, distance: f32) -> Self {
        Self { aspect, distance, ..Self::default() }
    }

    /// Set the orbit distance, clamped into `range`.
    pub fn set_distance_clamped(&mut self, distance: f32, range: &RangeInclusive<f32>) {
        self.distance = distance.clamp(*range.start(), *range.end());
    }

    /// Rotate by the given spherical deltas, keeping `polar` off the poles.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar = (self.polar + d_polar).clamp(ORBIT_POLAR_EPSILON, std::f32::consts::PI - ORBIT_POLAR_EPSILON);
    }

    /// World-space eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    #[must_use]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// OpenGL-style projection (clip z in −w..w).
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
