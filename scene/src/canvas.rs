//! `<canvas>` mount point and surface.
//!
//! The mount creates one canvas element per attach, sizes its backing store
//! by the device pixel ratio and its CSS box to the viewport, and appends it
//! to the host container. Detaching only removes a canvas that is still a
//! child of that container, so a host that already tore down its DOM does
//! not turn teardown into an error.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, Node};

use crate::error::SceneError;
use crate::projection::DrawList;
use crate::render;
use crate::surface::{MountPoint, RenderSurface};
use crate::viewport::Viewport;

/// A host element that canvases are attached to.
pub struct CanvasMount {
    document: Document,
    container: Element,
    dpr: f64,
}

impl CanvasMount {
    /// Wrap `container`, reading the device pixel ratio from the window.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Browser`] if there is no window or document.
    pub fn new(container: Element) -> Result<Self, SceneError> {
        let window = web_sys::window().ok_or_else(|| SceneError::Browser("no window".into()))?;
        let document = window.document().ok_or_else(|| SceneError::Browser("no document".into()))?;
        let dpr = window.device_pixel_ratio().max(1.0);
        Ok(Self { document, container, dpr })
    }

    fn create_canvas(&self, viewport: Viewport) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), SceneError> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|err| SceneError::browser(&err))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SceneError::RenderContextUnavailable("created element is not a canvas".into()))?;

        canvas.set_width((f64::from(viewport.width()) * self.dpr).round() as u32);
        canvas.set_height((f64::from(viewport.height()) * self.dpr).round() as u32);
        canvas
            .set_attribute(
                "style",
                &format!("display:block;width:{}px;height:{}px", viewport.width(), viewport.height()),
            )
            .map_err(|err| SceneError::browser(&err))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|err| SceneError::RenderContextUnavailable(format!("{err:?}")))?
            .ok_or_else(|| SceneError::RenderContextUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::RenderContextUnavailable("context is not 2d".into()))?;

        Ok((canvas, ctx))
    }
}

impl MountPoint for CanvasMount {
    type Surface = CanvasSurface;

    fn attach(&mut self, viewport: Viewport) -> Result<CanvasSurface, SceneError> {
        let (canvas, ctx) = self.create_canvas(viewport)?;
        self.container
            .append_child(&canvas)
            .map_err(|err| SceneError::browser(&err))?;
        Ok(CanvasSurface { canvas, ctx, viewport, dpr: self.dpr })
    }

    fn detach(&mut self, surface: &CanvasSurface) -> bool {
        let Some(parent) = surface.canvas.parent_node() else {
            return false;
        };
        let container: &Node = &self.container;
        if !parent.is_same_node(Some(container)) {
            return false;
        }
        match self.container.remove_child(&surface.canvas) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("canvas detach failed: {err:?}");
                false
            }
        }
    }
}

/// A canvas attached to a [`CanvasMount`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    dpr: f64,
}

impl RenderSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, frame: &DrawList) -> Result<(), SceneError> {
        render::draw(&self.ctx, frame, self.dpr).map_err(|err| SceneError::Present(format!("{err:?}")))
    }
}
