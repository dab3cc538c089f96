//! Orbit controls: pointer drag rotates the camera around its target.
//!
//! Input accumulates a pending spherical delta. Each [`OrbitControls::update`]
//! moves the camera by part of that delta (with damping) or all of it
//! (without), so a released drag keeps gliding for a few frames.

#[cfg(test)]
#[path = "orbit_test.rs"]
mod orbit_test;

use std::f32::consts::TAU;

use crate::camera::PerspectiveCamera;

/// Remaining deltas below this are dropped to end the glide.
const SETTLE_EPSILON: f32 = 1e-6;

/// Damped orbit input for one camera.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub enable_damping: bool,
    /// Fraction of the pending delta applied per update, in (0, 1].
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl OrbitControls {
    #[must_use]
    pub fn new(enable_damping: bool, damping_factor: f32) -> Self {
        Self {
            enable_damping,
            damping_factor,
            rotate_speed: 1.0,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        }
    }

    /// Record a pointer drag of `(dx, dy)` CSS pixels on a view `viewport_height` tall.
    ///
    /// Dragging right or down rotates the scene the same way, as a full-height
    /// drag turns the camera one full revolution.
    pub fn drag(&mut self, dx: f64, dy: f64, viewport_height: u32) {
        if viewport_height == 0 || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        let per_px = TAU / viewport_height as f32 * self.rotate_speed;
        self.pending_azimuth -= dx as f32 * per_px;
        self.pending_polar -= dy as f32 * per_px;
    }

    /// Apply pending rotation to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if self.is_settled() {
            return false;
        }
        if self.enable_damping {
            camera.rotate(self.pending_azimuth * self.damping_factor, self.pending_polar * self.damping_factor);
            let keep = 1.0 - self.damping_factor;
            self.pending_azimuth *= keep;
            self.pending_polar *= keep;
            if self.is_settled() {
                self.pending_azimuth = 0.0;
                self.pending_polar = 0.0;
            }
        } else {
            camera.rotate(self.pending_azimuth, self.pending_polar);
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
        }
        true
    }

    /// Whether no rotation is pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_azimuth.abs() < SETTLE_EPSILON && self.pending_polar.abs() < SETTLE_EPSILON
    }
}
