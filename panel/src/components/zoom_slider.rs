//! Range input bound to the scene's zoom parameter.

use std::ops::RangeInclusive;

use leptos::prelude::*;
use scene::options::ZoomControl;

use crate::util::zoom::{ZOOM_STEP, format_zoom, parse_zoom_input};

/// Zoom slider with a numeric readout.
///
/// In [`ZoomControl::DisplayOnly`] mode the input is disabled and only
/// mirrors `value`; `on_change` is never called.
#[component]
pub fn ZoomSlider<F>(mode: ZoomControl, range: RangeInclusive<f32>, value: Signal<f64>, on_change: F) -> impl IntoView
where
    F: Fn(f64) + Clone + 'static,
{
    let interactive = mode == ZoomControl::Interactive;
    let min = f64::from(*range.start());
    let max = f64::from(*range.end());
    let on_input = move |ev: leptos::ev::Event| {
        if !interactive {
            return;
        }
        if let Some(zoom) = parse_zoom_input(&event_target_value(&ev), &range) {
            on_change(zoom);
        }
    };

    view! {
        <div class="live-scene__zoom">
            <input
                class="live-scene__zoom-input"
                type="range"
                aria-label="Zoom"
                min=min
                max=max
                step=ZOOM_STEP
                disabled=!interactive
                prop:value=move || value.get()
                on:input=on_input
            />
            <span class="live-scene__zoom-readout">{move || format_zoom(value.get())}</span>
        </div>
    }
}
