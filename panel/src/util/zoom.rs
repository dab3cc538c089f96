//! Zoom slider value handling.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use std::ops::RangeInclusive;

/// Slider step in camera distance units.
pub const ZOOM_STEP: f64 = 1.0;

/// Parse a range input's `value` into a zoom inside `range`.
///
/// Returns `None` for empty or non-numeric input so a half-typed value
/// never reaches the scene.
pub fn parse_zoom_input(raw: &str, range: &RangeInclusive<f32>) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(f64::from(*range.start()), f64::from(*range.end())))
}

/// Readout text shown next to the slider.
pub fn format_zoom(zoom: f64) -> String {
    if (zoom - zoom.round()).abs() < 1e-9 {
        format!("{zoom:.0}")
    } else {
        format!("{zoom:.1}")
    }
}
