//! Frame clock and the time-driven mutations applied each frame.
//!
//! Every mutation is a pure function of the [`FrameTime`] handed in by the
//! driver, so a frame can be reproduced exactly from its timestamp.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use std::f32::consts::TAU;

use crate::consts::{BAR_AMPLITUDE, BAR_OFFSET, LINE_AMPLITUDE, WAVE_OMEGA_PER_MS};
use crate::graph::{NodeId, Primitive, SceneGraph};

/// Timestamp and sequence number of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Monotonic timestamp in milliseconds.
    pub t_ms: f64,
    /// Zero-based frame counter since mount.
    pub frame: u64,
}

/// Monotonic time source fed by the host's refresh callback.
///
/// A timestamp older than the last one is clamped, so `t_ms` never decreases.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    frames: u64,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `now_ms` and return the time of the frame about to render.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let now = if now_ms.is_finite() { now_ms } else { self.last_ms.unwrap_or(0.0) };
        let t_ms = self.last_ms.map_or(now, |last| now.max(last));
        self.last_ms = Some(t_ms);
        let frame = self.frames;
        self.frames += 1;
        FrameTime { t_ms, frame }
    }

    /// Number of frames ticked so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// `sin(t·ω + phase) · amplitude + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub omega_per_ms: f64,
    pub amplitude: f64,
    pub offset: f64,
}

impl Wave {
    /// Wave driving bar heights.
    pub const BAR: Self = Self { omega_per_ms: WAVE_OMEGA_PER_MS, amplitude: BAR_AMPLITUDE, offset: BAR_OFFSET };

    /// Wave driving line vertex heights.
    pub const LINE: Self = Self { omega_per_ms: WAVE_OMEGA_PER_MS, amplitude: LINE_AMPLITUDE, offset: 0.0 };

    #[must_use]
    pub fn sample(&self, t_ms: f64, phase: f64) -> f64 {
        (t_ms * self.omega_per_ms + phase).sin() * self.amplitude + self.offset
    }
}

/// Height of bar `index` at `t_ms`.
#[must_use]
pub fn bar_height(t_ms: f64, index: usize) -> f64 {
    Wave::BAR.sample(t_ms, index as f64)
}

/// Height of vertex `vertex` of line `line` at `t_ms`.
#[must_use]
pub fn line_vertex_y(t_ms: f64, vertex: usize, line: usize) -> f64 {
    Wave::LINE.sample(t_ms, (vertex + line) as f64)
}

/// A binding from a mutable primitive to the rule that animates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animated {
    /// Y scale of a bar follows [`bar_height`].
    Bar { node: NodeId, index: usize },
    /// Vertices `1..` of a line strip follow [`line_vertex_y`]; vertex 0 stays put.
    Line { node: NodeId, line: usize },
    /// X and Y rotation advance by `rate` radians each frame.
    Spin { node: NodeId, rate: f32 },
}

impl Animated {
    #[must_use]
    pub fn node(&self) -> NodeId {
        match *self {
            Self::Bar { node, .. } | Self::Line { node, .. } | Self::Spin { node, .. } => node,
        }
    }
}

/// Apply one frame of every binding to `graph`.
///
/// Bindings whose node is missing or of the wrong kind are skipped.
pub fn animate(graph: &mut SceneGraph, bindings: &[Animated], time: FrameTime) {
    for binding in bindings {
        let Some(node) = graph.get_mut(binding.node()) else {
            continue;
        };
        match *binding {
            Animated::Bar { index, .. } => {
                node.transform.scale.y = bar_height(time.t_ms, index) as f32;
            }
            Animated::Line { line, .. } => {
                let Primitive::LineStrip { points, .. } = &mut node.primitive else {
                    continue;
                };
                for (vertex, point) in points.iter_mut().enumerate().skip(1) {
                    point.y = line_vertex_y(time.t_ms, vertex, line) as f32;
                }
                node.revision += 1;
            }
            Animated::Spin { rate, .. } => {
                // Kept in [0, TAU) so f32 precision never swallows the increment.
                node.transform.rotation.x = (node.transform.rotation.x + rate).rem_euclid(TAU);
                node.transform.rotation.y = (node.transform.rotation.y + rate).rem_euclid(TAU);
            }
        }
    }
}
