//! Bridge component between host panel props and the imperative `scene::engine::SceneEngine`.
//!
//! ARCHITECTURE
//! ============
//! The scene crate owns the render loop and the canvas. This component owns
//! the mount `<div>` and maps prop changes onto engine operations: first
//! sizing mounts, later sizes resize, row counts toggle the placeholder,
//! slider input sets the zoom parameter, pointer drags orbit, and cleanup
//! unmounts.

#[cfg(test)]
#[path = "live_scene_panel_test.rs"]
mod live_scene_panel_test;

use leptos::prelude::*;
use scene::options::PanelOptions;

use crate::components::needs_data::NeedsData;
use crate::components::zoom_slider::ZoomSlider;
use crate::state::panel::PanelState;
#[cfg(feature = "hydrate")]
use crate::state::panel::ErrorSource;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use scene::engine::SceneEngine;
#[cfg(feature = "hydrate")]
use scene::error::SceneError;
#[cfg(feature = "hydrate")]
use scene::viewport::Viewport;

/// Inline size for the mount element and the placeholder.
fn size_style(width: f64, height: f64) -> String {
    format!("width: {:.0}px; height: {:.0}px;", width.max(0.0), height.max(0.0))
}

/// Mount element style: hidden while the placeholder is shown.
fn mount_style(width: f64, height: f64, needs_data: bool) -> String {
    let display = if needs_data { "none" } else { "block" };
    format!("{} display: {display}; touch-action: none;", size_style(width, height))
}

/// Live 3D scene panel.
///
/// On hydration this mounts a `SceneEngine` into its `<div>` once the
/// panel has a positive size, and tears it down when the component is
/// disposed.
#[component]
pub fn LiveScenePanel(
    #[prop(into)] width: Signal<f64>,
    #[prop(into)] height: Signal<f64>,
    #[prop(into)] rows: Signal<usize>,
    #[prop(optional)] options: PanelOptions,
) -> impl IntoView {
    let state = RwSignal::new(PanelState::new(&options));
    let mount_ref = NodeRef::<leptos::html::Div>::new();
    let zoom_mode = options.zoom_control;
    let zoom_range = options.zoom_range();
    let show_slider = options.shows_zoom_slider();

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<SceneEngine>));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let options = options.clone();
        let unsupported = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(div) = mount_ref.get() else {
                return;
            };
            if unsupported.get() {
                return;
            }
            let viewport = match Viewport::from_css(width.get(), height.get()) {
                Ok(viewport) => viewport,
                Err(err) => {
                    log::debug!("live scene waiting for a size: {err}");
                    return;
                }
            };

            let mut slot = engine.borrow_mut();
            let result = if let Some(engine) = slot.as_mut() {
                engine.resize(viewport)
            } else {
                let zoom = state.get_untracked().zoom as f32;
                let options = PanelOptions { zoom, ..options.clone() };
                SceneEngine::mount(div.into(), viewport, options, rows.get_untracked()).map(|mounted| {
                    *slot = Some(mounted);
                })
            };
            drop(slot);
            match result {
                Ok(()) => state.update(|s| s.clear_error(ErrorSource::Mount)),
                Err(err) => {
                    if matches!(err, SceneError::RenderContextUnavailable(_)) {
                        unsupported.set(true);
                    }
                    state.update(|s| s.record_error(ErrorSource::Mount, err.to_string()));
                }
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let count = rows.get();
            let result = match engine.borrow_mut().as_mut() {
                Some(engine) => engine.set_data_rows(count),
                None => Ok(()),
            };
            match result {
                Ok(()) => state.update(|s| s.clear_error(ErrorSource::Data)),
                Err(err) => state.update(|s| s.record_error(ErrorSource::Data, err.to_string())),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = StoredValue::new_local(Rc::clone(&engine));
        on_cleanup(move || {
            engine.try_with_value(|engine| {
                if let Some(mut engine) = engine.borrow_mut().take() {
                    engine.unmount();
                }
            });
        });
    }

    let on_zoom = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |zoom: f64| {
                state.update(|s| s.zoom = zoom);
                if let Some(engine) = engine.borrow().as_ref() {
                    if let Err(err) = engine.set_parameter("zoom", zoom) {
                        log::warn!("zoom rejected: {err}");
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |zoom: f64| state.update(|s| s.zoom = zoom)
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if let Some(div) = mount_ref.get() {
                    if let Err(err) = div.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("pointer capture failed: {err:?}");
                    }
                }
                let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                state.update_untracked(|s| s.begin_drag(x, y));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                let Some((dx, dy)) = state.try_update_untracked(|s| s.drag_to(x, y)).flatten() else {
                    return;
                };
                if let Some(engine) = engine.borrow().as_ref() {
                    engine.orbit_drag(dx, dy);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        state.update_untracked(PanelState::end_drag);
    };

    let needs_data = move || rows.get() == 0;
    let zoom = Signal::derive(move || state.get().zoom);
    let error = move || state.with(|s| s.error_message().map(str::to_owned));

    view! {
        <div class="live-scene">
            <div
                class="live-scene__mount"
                node_ref=mount_ref
                style=move || mount_style(width.get(), height.get(), needs_data())
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_up
            ></div>
            <Show when=needs_data>
                <NeedsData style=Signal::derive(move || size_style(width.get(), height.get())) />
            </Show>
            {move || error().map(|message| view! { <p class="live-scene__error">{message}</p> })}
            {show_slider.then(|| {
                view! { <ZoomSlider mode=zoom_mode range=zoom_range.clone() value=zoom on_change=on_zoom.clone() /> }
            })}
        </div>
    }
}
