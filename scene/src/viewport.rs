//! Pixel dimensions of a mounted view.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::error::SceneError;

/// Width and height in CSS pixels, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Build a viewport, rejecting zero-area sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidViewport`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Build a viewport from host-supplied CSS sizes, rounding to whole pixels.
    ///
    /// Non-finite and sub-pixel sizes are rejected rather than clamped.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidViewport`] if either size rounds to zero or is not finite.
    pub fn from_css(width: f64, height: f64) -> Result<Self, SceneError> {
        Self::new(css_to_px(width), css_to_px(height))
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

fn css_to_px(value: f64) -> u32 {
    if !value.is_finite() || value < 0.5 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}
