//! Projection: turns the scene graph into a screen-space draw list.
//!
//! This is where the 3D scene becomes 2D commands. It is pure and
//! browser-free; [`crate::render`] only paints what comes out of here.
//! Commands are ordered far-to-near so painting them in order approximates
//! a depth buffer.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use glam::{Mat4, Vec3, Vec4};

use crate::camera::{PerspectiveCamera, Point};
use crate::consts::BACKGROUND;
use crate::graph::{Primitive, Rgb, SceneGraph};
use crate::viewport::Viewport;

const AXIS_X: Rgb = Rgb(0xff0000);
const AXIS_Y: Rgb = Rgb(0x00ff00);
const AXIS_Z: Rgb = Rgb(0x0000ff);

/// Unit cube corners; bit 0 picks +x, bit 1 +y, bit 2 +z.
const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

const CUBE_EDGES: [(usize, usize); 12] =
    [(0, 1), (2, 3), (4, 5), (6, 7), (0, 2), (1, 3), (4, 6), (5, 7), (0, 4), (1, 5), (2, 6), (3, 7)];

/// Faces wound counter-clockwise when seen from outside.
const CUBE_FACES: [[usize; 4]; 6] = [
    [4, 5, 7, 6], // +z
    [1, 0, 2, 3], // -z
    [5, 1, 3, 7], // +x
    [0, 4, 6, 2], // -x
    [6, 7, 3, 2], // +y
    [0, 1, 5, 4], // -y
];

/// One screen-space drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked segment.
    Line { from: Point, to: Point, color: Rgb, depth: f32 },
    /// Filled convex quad.
    Quad { points: [Point; 4], color: Rgb, depth: f32 },
}

impl DrawCommand {
    /// Distance from the eye used for ordering.
    #[must_use]
    pub fn depth(&self) -> f32 {
        match self {
            Self::Line { depth, .. } | Self::Quad { depth, .. } => *depth,
        }
    }
}

/// Everything a surface needs to present one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub viewport: Viewport,
    pub background: Rgb,
    /// Camera distance the frame was projected with.
    pub camera_distance: f32,
    /// Far-to-near.
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn lines(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }

    #[must_use]
    pub fn quads(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Quad { .. })).count()
    }
}

/// Project every drawable node of `graph` through `camera` onto `viewport`.
#[must_use]
pub fn project(graph: &SceneGraph, camera: &PerspectiveCamera, viewport: Viewport) -> DrawList {
    let projector = Projector { view_projection: camera.view_projection(), near: camera.near, viewport };
    let worlds = graph.world_matrices();
    let mut commands = Vec::new();

    for (id, node) in graph.iter() {
        let Some(&world) = worlds.get(id.index()) else {
            continue;
        };
        let mvp = projector.view_projection * world;
        match &node.primitive {
            Primitive::Group => {}
            Primitive::Grid { size, divisions, center, line } => {
                projector.grid(&mut commands, mvp, *size, *divisions, *center, *line);
            }
            Primitive::Axes { size } => {
                projector.segment(&mut commands, mvp, Vec3::ZERO, Vec3::X * *size, AXIS_X);
                projector.segment(&mut commands, mvp, Vec3::ZERO, Vec3::Y * *size, AXIS_Y);
                projector.segment(&mut commands, mvp, Vec3::ZERO, Vec3::Z * *size, AXIS_Z);
            }
            Primitive::Cuboid { material } if material.wireframe => {
                for (a, b) in CUBE_EDGES {
                    projector.segment(&mut commands, mvp, CUBE_CORNERS[a], CUBE_CORNERS[b], material.color);
                }
            }
            Primitive::Cuboid { material } => {
                for face in CUBE_FACES {
                    projector.face(&mut commands, mvp, face, material.color);
                }
            }
            Primitive::LineStrip { points, color } => {
                for pair in points.windows(2) {
                    projector.segment(&mut commands, mvp, pair[0], pair[1], *color);
                }
            }
        }
    }

    commands.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
    DrawList { viewport, background: Rgb(BACKGROUND), camera_distance: camera.distance, commands }
}

struct Projector {
    view_projection: Mat4,
    near: f32,
    viewport: Viewport,
}

impl Projector {
    /// Clip-space to screen. `None` when the point is in front of the near plane.
    fn to_screen(&self, clip: Vec4) -> Option<(Point, f32)> {
        if clip.w < self.near {
            return None;
        }
        let ndc_x = f64::from(clip.x / clip.w);
        let ndc_y = f64::from(clip.y / clip.w);
        let x = (ndc_x + 1.0) * 0.5 * f64::from(self.viewport.width());
        let y = (1.0 - ndc_y) * 0.5 * f64::from(self.viewport.height());
        Some((Point::new(x, y), clip.w))
    }

    fn point(&self, mvp: Mat4, local: Vec3) -> Option<(Point, f32)> {
        self.to_screen(mvp * local.extend(1.0))
    }

    fn segment(&self, out: &mut Vec<DrawCommand>, mvp: Mat4, a: Vec3, b: Vec3, color: Rgb) {
        let (Some((from, da)), Some((to, db))) = (self.point(mvp, a), self.point(mvp, b)) else {
            return;
        };
        out.push(DrawCommand::Line { from, to, color, depth: (da + db) * 0.5 });
    }

    fn face(&self, out: &mut Vec<DrawCommand>, mvp: Mat4, face: [usize; 4], color: Rgb) {
        let mut points = [Point::new(0.0, 0.0); 4];
        let mut depth = 0.0;
        for (slot, corner) in points.iter_mut().zip(face) {
            let Some((point, d)) = self.point(mvp, CUBE_CORNERS[corner]) else {
                return;
            };
            *slot = point;
            depth += d;
        }
        // Screen y points down, so front faces wind clockwise (negative area).
        if signed_area(&points) >= 0.0 {
            return;
        }
        out.push(DrawCommand::Quad { points, color, depth: depth / 4.0 });
    }

    fn grid(&self, out: &mut Vec<DrawCommand>, mvp: Mat4, size: f32, divisions: u32, center: Rgb, line: Rgb) {
        if divisions == 0 {
            return;
        }
        let half = size / 2.0;
        let step = size / divisions as f32;
        for i in 0..=divisions {
            let k = -half + i as f32 * step;
            let color = if i * 2 == divisions { center } else { line };
            self.segment(out, mvp, Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k), color);
            self.segment(out, mvp, Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half), color);
        }
    }
}

/// Shoelace area; positive for counter-clockwise in a y-up frame.
fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        * 0.5
}
