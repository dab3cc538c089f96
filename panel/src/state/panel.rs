//! Per-panel UI state.
//!
//! `LiveScenePanel` owns one of these in an `RwSignal`. The scene engine
//! itself stays outside the reactive graph; this struct only mirrors what
//! the chrome needs to render.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use scene::options::PanelOptions;

/// Which engine operation recorded an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSource {
    /// Mounting or resizing the scene.
    Mount,
    /// Applying a data-row change.
    Data,
}

/// An error shown instead of the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelError {
    pub source: ErrorSource,
    pub message: String,
}

/// Chrome-facing snapshot of one live scene panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    /// Zoom shown by the slider.
    pub zoom: f64,
    /// Last mount or data error.
    pub error: Option<PanelError>,
    /// Pointer position at the previous drag event, while a drag is active.
    pub drag_origin: Option<(f64, f64)>,
}

impl PanelState {
    pub fn new(options: &PanelOptions) -> Self {
        Self { zoom: f64::from(options.zoom), error: None, drag_origin: None }
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag_origin = Some((x, y));
    }

    /// Move an active drag to `(x, y)` and return the delta since the last event.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (last_x, last_y) = self.drag_origin?;
        self.drag_origin = Some((x, y));
        Some((x - last_x, y - last_y))
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    pub fn record_error(&mut self, source: ErrorSource, message: impl Into<String>) {
        self.error = Some(PanelError { source, message: message.into() });
    }

    /// Clear the current error if `source` recorded it.
    pub fn clear_error(&mut self, source: ErrorSource) {
        if self.error.as_ref().is_some_and(|error| error.source == source) {
            self.error = None;
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|error| error.message.as_str())
    }
}
