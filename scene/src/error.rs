//! Error type shared by every fallible scene operation.

/// Error returned by lifecycle, option and surface operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A viewport dimension was zero.
    #[error("invalid viewport {width}x{height}: both dimensions must be positive")]
    InvalidViewport { width: u32, height: u32 },
    /// Options parsed but failed validation.
    #[error("invalid panel options: {0}")]
    InvalidOptions(String),
    /// Options JSON could not be parsed.
    #[error("failed to parse panel options: {0}")]
    OptionsParse(#[from] serde_json::Error),
    /// No surface or drawing context could be created. Fatal for the instance.
    #[error("render context unavailable: {0}")]
    RenderContextUnavailable(String),
    /// `set_parameter` was called with a name that is not bound.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    /// `set_parameter` was called with a non-finite value.
    #[error("invalid value {value} for parameter {name}")]
    InvalidParameter { name: String, value: f64 },
    /// A DOM call failed.
    #[error("browser call failed: {0}")]
    Browser(String),
    /// A surface failed to draw a frame.
    #[error("failed to present frame: {0}")]
    Present(String),
}

impl SceneError {
    /// Wrap a `JsValue` error from a DOM call.
    #[must_use]
    pub fn browser(err: &wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{err:?}"))
    }
}
