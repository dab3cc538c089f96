//! Rendering: paints a [`DrawList`] onto a 2D context.
//!
//! This module is the only place that draws on a
//! [`web_sys::CanvasRenderingContext2d`]. It receives a finished draw list
//! and produces pixels; it does not see the scene graph or camera.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::canvas::CanvasSurface::present`]) maps them to
//! [`crate::error::SceneError::Present`].

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::projection::{DrawCommand, DrawList};

/// Stroke width for lines and wireframes, in CSS pixels.
const LINE_WIDTH_PX: f64 = 1.0;

/// Clear to the background and paint every command in order.
///
/// `dpr` is the device pixel ratio the backing store was sized with.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, frame: &DrawList, dpr: f64) -> Result<(), JsValue> {
    let width = f64::from(frame.viewport.width());
    let height = f64::from(frame.viewport.height());

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(&frame.background.css());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_line_width(LINE_WIDTH_PX);

    for command in &frame.commands {
        match command {
            DrawCommand::Line { from, to, color, .. } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.set_stroke_style_str(&color.css());
                ctx.stroke();
            }
            DrawCommand::Quad { points, color, .. } => {
                trace_polygon(ctx, points);
                ctx.set_fill_style_str(&color.css());
                ctx.fill();
            }
        }
    }

    Ok(())
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    ctx.close_path();
}
