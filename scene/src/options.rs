//! Panel options supplied by the host as JSON.
//!
//! Field names are camelCase on the wire. Every field has a default, so an
//! empty object (`{}`) is a valid dashboard configuration.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_GRID_CUBES, DEFAULT_LINE_COUNT, DEFAULT_LINE_POINTS, DEFAULT_ZOOM, MAX_GRID_CUBES, MAX_LINE_COUNT,
    MAX_LINE_POINTS, ORBIT_DAMPING_FACTOR, ZOOM_MAX, ZOOM_MIN,
};
use crate::error::SceneError;

/// Which scene the panel builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneKind {
    /// Floor grid, axes, cube lattice, rainbow bars and line charts together.
    #[default]
    Dashboard,
    /// N×N lattice of wireframe cubes.
    CubeGrid,
    /// Seven animated rainbow bars.
    RainbowBars,
    /// Group of animated polylines.
    LineCharts,
    /// One cube spinning about X and Y.
    RotatingCube,
}

/// How the zoom slider under the view behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoomControl {
    /// No slider.
    Hidden,
    /// Slider shows the zoom value but ignores input.
    #[default]
    DisplayOnly,
    /// Slider input drives the camera distance.
    Interactive,
}

/// Typed panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    pub scene: SceneKind,
    /// Initial camera distance for scenes that bind zoom.
    pub zoom: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_control: ZoomControl,
    /// Lattice edge length for the cube grid.
    pub grid_size: u32,
    pub line_count: u32,
    pub line_points: u32,
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Spin the cube lattice as a whole.
    pub spin: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            zoom: DEFAULT_ZOOM,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_control: ZoomControl::default(),
            grid_size: DEFAULT_GRID_CUBES,
            line_count: DEFAULT_LINE_COUNT,
            line_points: DEFAULT_LINE_POINTS,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            spin: false,
        }
    }
}

impl PanelOptions {
    /// Parse and validate options from host JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OptionsParse`] for malformed JSON and
    /// [`SceneError::InvalidOptions`] for values [`PanelOptions::validate`] rejects.
    pub fn from_json(raw: &str) -> Result<Self, SceneError> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Check ranges and counts.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOptions`] describing the first bad field.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.zoom_min.is_finite() && self.zoom_max.is_finite() && self.zoom_min > 0.0) {
            return Err(invalid(format!("zoom range {}..={} must be finite and positive", self.zoom_min, self.zoom_max)));
        }
        if self.zoom_min > self.zoom_max {
            return Err(invalid(format!("zoomMin {} exceeds zoomMax {}", self.zoom_min, self.zoom_max)));
        }
        if !self.zoom_range().contains(&self.zoom) {
            return Err(invalid(format!("zoom {} outside {}..={}", self.zoom, self.zoom_min, self.zoom_max)));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(invalid(format!("dampingFactor {} must be in (0, 1]", self.damping_factor)));
        }
        check_count("gridSize", self.grid_size, MAX_GRID_CUBES)?;
        check_count("lineCount", self.line_count, MAX_LINE_COUNT)?;
        check_count("linePoints", self.line_points, MAX_LINE_POINTS)?;
        Ok(())
    }

    #[must_use]
    pub fn zoom_range(&self) -> RangeInclusive<f32> {
        self.zoom_min..=self.zoom_max
    }

    /// Whether the configured scene binds camera distance to the zoom parameter.
    #[must_use]
    pub fn binds_zoom(&self) -> bool {
        self.scene != SceneKind::RotatingCube
    }

    /// Whether the slider is rendered at all.
    #[must_use]
    pub fn shows_zoom_slider(&self) -> bool {
        self.binds_zoom() && self.zoom_control != ZoomControl::Hidden
    }
}

fn check_count(name: &str, value: u32, max: u32) -> Result<(), SceneError> {
    if value == 0 || value > max {
        return Err(invalid(format!("{name} {value} must be in 1..={max}")));
    }
    Ok(())
}

fn invalid(message: String) -> SceneError {
    SceneError::InvalidOptions(message)
}
