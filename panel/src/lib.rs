//! # panel
//!
//! Leptos host for the live 3D scene. Supplies the `scene` crate with a
//! mount element, its size, the panel options and data readiness, and
//! renders the chrome around it: the needs-data placeholder and the zoom
//! slider.
//!
//! Browser-only code is behind the `hydrate` feature; with `ssr` the
//! components render static markup and never touch a canvas.


pub mod components;
pub mod state;
pub mod util;

/// Route `log` output to the browser console and install the panic hook.
///
/// Safe to call more than once; later calls keep the first logger.
#[cfg(feature = "hydrate")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already installed: {err}").into());
    }
}

/// Parse host-supplied panel options, falling back to defaults on error.
pub fn options_or_default(raw: Option<&str>) -> scene::options::PanelOptions {
    let Some(raw) = raw else {
        return scene::options::PanelOptions::default();
    };
    match scene::options::PanelOptions::from_json(raw) {
        Ok(options) => options,
        Err(err) => {
            leptos::logging::warn!("ignoring panel options: {err}");
            scene::options::PanelOptions::default()
        }
    }
}
