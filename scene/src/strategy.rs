//! Scene-construction strategies.
//!
//! A strategy populates an empty [`SceneGraph`] once per mount and returns
//! the bindings that animate its mutable primitives. The lifecycle code in
//! [`crate::view`] never looks inside a scene; it only replays the bindings.

#[cfg(test)]
#[path = "strategy_test.rs"]
mod strategy_test;

use glam::Vec3;

use crate::animation::{Animated, bar_height, line_vertex_y};
use crate::consts::{
    AXES_LENGTH, CUBE_CAMERA_DISTANCE, CUBE_GREEN, FLOOR_GRID_DIVISIONS, FLOOR_GRID_SIZE, GRID_CENTER, GRID_LINE,
    LINE_WHITE, RAINBOW, SPIN_RATE_RAD,
};
use crate::graph::{Material, Primitive, Rgb, SceneGraph, Transform};
use crate::options::{PanelOptions, SceneKind};

/// Builds one kind of scene.
pub trait SceneStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Populate `graph` and return the animation bindings for its mutable primitives.
    fn build(&self, graph: &mut SceneGraph) -> Vec<Animated>;

    /// Camera distance that ignores the zoom parameter, if the scene has one.
    fn fixed_distance(&self) -> Option<f32> {
        None
    }

    /// Whether pointer drag orbits the camera.
    fn orbit(&self) -> bool {
        true
    }
}

/// Pick the strategy configured in `options`.
#[must_use]
pub fn strategy_for(options: &PanelOptions) -> Box<dyn SceneStrategy> {
    match options.scene {
        SceneKind::Dashboard => Box::new(Dashboard {
            grid_size: options.grid_size,
            line_count: options.line_count,
            line_points: options.line_points,
            spin: options.spin,
        }),
        SceneKind::CubeGrid => Box::new(CubeGrid { size: options.grid_size, spin: options.spin }),
        SceneKind::RainbowBars => Box::new(RainbowBars),
        SceneKind::LineCharts => Box::new(LineCharts { count: options.line_count, points: options.line_points }),
        SceneKind::RotatingCube => Box::new(RotatingCube),
    }
}

// =============================================================
// Strategies
// =============================================================

/// N×N lattice of wireframe unit cubes at integer offsets.
#[derive(Debug, Clone, Copy)]
pub struct CubeGrid {
    pub size: u32,
    pub spin: bool,
}

impl SceneStrategy for CubeGrid {
    fn name(&self) -> &'static str {
        "cube-grid"
    }

    fn build(&self, graph: &mut SceneGraph) -> Vec<Animated> {
        add_cube_grid(graph, self.size, self.spin)
    }
}

/// Seven solid bars whose heights follow the bar wave.
#[derive(Debug, Clone, Copy)]
pub struct RainbowBars;

impl SceneStrategy for RainbowBars {
    fn name(&self) -> &'static str {
        "rainbow-bars"
    }

    fn build(&self, graph: &mut SceneGraph) -> Vec<Animated> {
        add_rainbow_bars(graph)
    }
}

/// Independently animated polylines.
#[derive(Debug, Clone, Copy)]
pub struct LineCharts {
    pub count: u32,
    pub points: u32,
}

impl SceneStrategy for LineCharts {
    fn name(&self) -> &'static str {
        "line-charts"
    }

    fn build(&self, graph: &mut SceneGraph) -> Vec<Animated> {
        add_line_charts(graph, self.count, self.points)
    }
}

/// A single solid cube spinning about X and Y.
#[derive(Debug, Clone, Copy)]
pub struct RotatingCube;

impl SceneStrategy for RotatingCube {
    fn name(&self) -> &'static str {
        "rotating-cube"
    }

    fn build(&self, graph: &mut SceneGraph) -> Vec<Animated> {
        let cube = graph.add(Transform::default(), Primitive::Cuboid { material: Material::solid(CUBE_GREEN) });
        vec![Animated::Spin { node: cube, rate: SPIN_RATE_RAD }]
    }

    fn fixed_distance(&self) -> Option<f32> {
        Some(CUBE_CAMERA_DISTANCE)
    }

    fn orbit(&self) -> bool {
        false
    }
}

/// Floor grid, axes, cube lattice, bars and lines in one scene.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard {
    pub grid_size: u32,
    pub line_count: u32,
    pub line_points: u32,
    pub spin: bool,
}

impl SceneStrategy for Dashboard {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn build(&self, graph: &mut SceneGraph) -> Vec<Animated> {
        graph.add(
            Transform::default(),
            Primitive::Grid {
                size: FLOOR_GRID_SIZE,
                divisions: FLOOR_GRID_DIVISIONS,
                center: Rgb(GRID_CENTER),
                line: Rgb(GRID_LINE),
            },
        );
        graph.add(Transform::default(), Primitive::Axes { size: AXES_LENGTH });

        let mut bindings = add_cube_grid(graph, self.grid_size, self.spin);
        bindings.extend(add_rainbow_bars(graph));
        bindings.extend(add_line_charts(graph, self.line_count, self.line_points));
        bindings
    }
}

// =============================================================
// Builders
// =============================================================

fn add_cube_grid(graph: &mut SceneGraph, size: u32, spin: bool) -> Vec<Animated> {
    let group = graph.add(Transform::default(), Primitive::Group);
    for i in 0..size {
        for j in 0..size {
            let position = Vec3::new(i as f32, j as f32, 0.0);
            graph.add_child(group, Transform::at(position), Primitive::Cuboid { material: Material::wireframe(CUBE_GREEN) });
        }
    }
    if spin { vec![Animated::Spin { node: group, rate: SPIN_RATE_RAD }] } else { Vec::new() }
}

fn add_rainbow_bars(graph: &mut SceneGraph) -> Vec<Animated> {
    let group = graph.add(Transform::at(Vec3::new(0.0, 0.0, 5.0)), Primitive::Group);
    RAINBOW
        .iter()
        .enumerate()
        .map(|(index, &color)| {
            let mut transform = Transform::at(Vec3::new(index as f32 * 2.0 - 7.0, 15.0, 0.0));
            transform.scale.y = bar_height(0.0, index) as f32;
            let node = graph.add_child(group, transform, Primitive::Cuboid { material: Material::solid(color) });
            Animated::Bar { node, index }
        })
        .collect()
}

fn add_line_charts(graph: &mut SceneGraph, count: u32, points: u32) -> Vec<Animated> {
    let group = graph.add(Transform::at(Vec3::new(0.0, 0.0, 5.0)), Primitive::Group);
    let half_span = points.saturating_sub(1) as f32;
    (0..count as usize)
        .map(|line| {
            let vertices = (0..points as usize)
                .map(|vertex| Vec3::new(vertex as f32 * 2.0 - half_span, line_vertex_y(0.0, vertex, line) as f32, 0.0))
                .collect();
            let transform = Transform::at(Vec3::new(0.0, -15.0 + line as f32 * 5.0, 0.0));
            let node =
                graph.add_child(group, transform, Primitive::LineStrip { points: vertices, color: Rgb(LINE_WHITE) });
            Animated::Line { node, line }
        })
        .collect()
}
