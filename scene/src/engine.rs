//! Browser driver for a [`LiveSceneView`] on a `<canvas>`.
//!
//! [`SceneEngine`] shares the view with a [`FrameLoop`] that calls
//! [`LiveSceneView::on_frame`] once per `requestAnimationFrame`. The loop
//! runs only while the view is [`Phase::Running`]; every operation that
//! rebuilds the view stops it first and restarts it afterwards.
//!
//! The frame callback holds an `Rc` to the slot it is stored in. Stopping
//! the loop takes the callback out of the slot, which breaks that cycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use crate::canvas::CanvasMount;
use crate::error::SceneError;
use crate::options::PanelOptions;
use crate::scheduler::{NextFrame, step_frame};
use crate::view::{LiveSceneView, Phase};
use crate::viewport::Viewport;

type SharedView = Rc<RefCell<LiveSceneView<CanvasMount>>>;
type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

// =============================================================
// SceneEngine
// =============================================================

/// A live scene mounted into a DOM container.
///
/// Dropping the engine unmounts the view and cancels any pending frame.
pub struct SceneEngine {
    view: SharedView,
    frames: FrameLoop,
}

impl SceneEngine {
    /// Mount a scene into `container` and start rendering if `rows > 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOptions`] for bad options,
    /// [`SceneError::RenderContextUnavailable`] when no 2D context can be
    /// created, and [`SceneError::Browser`] when the window is missing.
    pub fn mount(container: Element, viewport: Viewport, options: PanelOptions, rows: usize) -> Result<Self, SceneError> {
        let mount = CanvasMount::new(container)?;
        let mut view = LiveSceneView::new(mount, viewport, options)?;
        view.mount(rows)?;
        let mut engine = Self { view: Rc::new(RefCell::new(view)), frames: FrameLoop::new() };
        engine.sync_loop()?;
        Ok(engine)
    }

    /// Rebuild at a new size.
    ///
    /// # Errors
    ///
    /// See [`LiveSceneView::resize`].
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        self.rebuild(|view| view.resize(viewport))
    }

    /// Report the host's current row count.
    ///
    /// # Errors
    ///
    /// See [`LiveSceneView::set_data_rows`].
    pub fn set_data_rows(&mut self, rows: usize) -> Result<(), SceneError> {
        self.rebuild(|view| view.set_data_rows(rows))
    }

    /// Update a bound parameter; see [`LiveSceneView::set_parameter`].
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownParameter`] or [`SceneError::InvalidParameter`].
    pub fn set_parameter(&self, name: &str, value: f64) -> Result<(), SceneError> {
        self.view.borrow_mut().set_parameter(name, value)
    }

    /// Feed a pointer drag in CSS pixels to the orbit controls.
    pub fn orbit_drag(&self, dx: f64, dy: f64) {
        self.view.borrow_mut().orbit_drag(dx, dy);
    }

    /// Cancel frames and release the canvas. Idempotent.
    pub fn unmount(&mut self) {
        self.frames.stop();
        self.view.borrow_mut().unmount();
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.view.borrow().phase()
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.view.borrow().zoom()
    }

    fn rebuild(&mut self, apply: impl FnOnce(&mut LiveSceneView<CanvasMount>) -> Result<(), SceneError>) -> Result<(), SceneError> {
        self.frames.stop();
        let result = apply(&mut self.view.borrow_mut());
        self.sync_loop()?;
        result
    }

    fn sync_loop(&mut self) -> Result<(), SceneError> {
        if self.view.borrow().phase() == Phase::Running {
            self.frames.start(&self.view)
        } else {
            self.frames.stop();
            Ok(())
        }
    }
}

impl Drop for SceneEngine {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================
// FrameLoop
// =============================================================

/// Self-rescheduling `requestAnimationFrame` loop.
struct FrameLoop {
    active: Rc<Cell<bool>>,
    request: Rc<Cell<Option<i32>>>,
    callback: CallbackSlot,
}

impl FrameLoop {
    fn new() -> Self {
        Self { active: Rc::new(Cell::new(false)), request: Rc::new(Cell::new(None)), callback: Rc::new(RefCell::new(None)) }
    }

    fn start(&mut self, view: &SharedView) -> Result<(), SceneError> {
        if self.active.get() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| SceneError::Browser("no window".into()))?;

        let view = Rc::clone(view);
        let active = Rc::clone(&self.active);
        let request = Rc::clone(&self.request);
        let slot = Rc::clone(&self.callback);
        let frame_window = window.clone();
        let callback = Closure::wrap(Box::new(move |now_ms: f64| {
            request.set(None);
            if step_frame(&active, &view, now_ms) == NextFrame::Halt {
                return;
            }
            match schedule(&frame_window, &slot) {
                Ok(id) => request.set(Some(id)),
                Err(err) => {
                    log::warn!("requestAnimationFrame failed: {err:?}");
                    active.set(false);
                }
            }
        }) as Box<dyn FnMut(f64)>);
        *self.callback.borrow_mut() = Some(callback);

        let id = schedule(&window, &self.callback).map_err(|err| SceneError::browser(&err))?;
        self.request.set(Some(id));
        self.active.set(true);
        Ok(())
    }

    fn stop(&mut self) {
        self.active.set(false);
        if let Some(id) = self.request.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {err:?}");
                }
            }
        }
        self.callback.borrow_mut().take();
    }
}

fn schedule(window: &Window, slot: &CallbackSlot) -> Result<i32, JsValue> {
    let callback = slot.borrow();
    let Some(callback) = callback.as_ref() else {
        return Err(JsValue::from_str("frame callback released"));
    };
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    window.request_animation_frame(function)
}
