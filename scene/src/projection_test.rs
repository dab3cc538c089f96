#![allow(clippy::float_cmp)]

use super::*;
use crate::graph::{Material, Transform};

fn viewport() -> Viewport {
    Viewport::new(800, 600).expect("viewport")
}

fn camera(distance: f32) -> PerspectiveCamera {
    PerspectiveCamera::new(viewport().aspect(), distance)
}

fn single(primitive: Primitive, transform: Transform) -> SceneGraph {
    let mut graph = SceneGraph::new();
    graph.add(transform, primitive);
    graph
}

// =============================================================
// Metadata
// =============================================================

#[test]
fn draw_list_carries_viewport_background_and_distance() {
    let list = project(&SceneGraph::new(), &camera(42.0), viewport());
    assert_eq!(list.viewport, viewport());
    assert_eq!(list.background, Rgb(0x000000));
    assert_eq!(list.camera_distance, 42.0);
    assert!(list.commands.is_empty());
}

#[test]
fn groups_draw_nothing() {
    let list = project(&single(Primitive::Group, Transform::default()), &camera(5.0), viewport());
    assert!(list.commands.is_empty());
}

// =============================================================
// Primitives
// =============================================================

#[test]
fn wireframe_cube_draws_twelve_edges() {
    let graph = single(Primitive::Cuboid { material: Material::wireframe(0x00ff00) }, Transform::default());
    let list = project(&graph, &camera(5.0), viewport());
    assert_eq!(list.lines(), 12);
    assert_eq!(list.quads(), 0);
}

#[test]
fn solid_cube_facing_camera_shows_only_front_face() {
    let graph = single(Primitive::Cuboid { material: Material::solid(0x00ff00) }, Transform::default());
    let list = project(&graph, &camera(5.0), viewport());
    assert_eq!(list.quads(), 1);
    let Some(DrawCommand::Quad { color, .. }) = list.commands.first() else {
        panic!("quad expected");
    };
    assert_eq!(*color, Rgb(0x00ff00));
}

#[test]
fn rotated_solid_cube_shows_more_faces() {
    let transform = Transform { rotation: Vec3::new(0.5, 0.7, 0.0), ..Transform::default() };
    let graph = single(Primitive::Cuboid { material: Material::solid(0x00ff00) }, transform);
    let list = project(&graph, &camera(5.0), viewport());
    assert!((2..=3).contains(&list.quads()));
}

#[test]
fn axes_draw_three_colored_segments() {
    let graph = single(Primitive::Axes { size: 15.0 }, Transform::default());
    let list = project(&graph, &camera(50.0), viewport());
    let colors = list
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { color, .. } => Some(*color),
            DrawCommand::Quad { .. } => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(colors.len(), 3);
    assert!(colors.contains(&AXIS_X));
    assert!(colors.contains(&AXIS_Y));
    assert!(colors.contains(&AXIS_Z));
}

#[test]
fn grid_draws_two_lines_per_division_boundary() {
    let grid = Primitive::Grid { size: 30.0, divisions: 30, center: Rgb(0x444444), line: Rgb(0x888888) };
    let list = project(&single(grid, Transform::default()), &camera(50.0), viewport());
    assert_eq!(list.lines(), 62);
    let centers = list
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { color, .. } if *color == Rgb(0x444444)))
        .count();
    assert_eq!(centers, 2);
}

#[test]
fn line_strip_draws_one_segment_per_pair() {
    let points = vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
    let graph = single(Primitive::LineStrip { points, color: Rgb(0xffffff) }, Transform::default());
    assert_eq!(project(&graph, &camera(10.0), viewport()).lines(), 2);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn target_lands_at_viewport_center() {
    let graph = single(
        Primitive::LineStrip { points: vec![Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)], color: Rgb(0) },
        Transform::default(),
    );
    let list = project(&graph, &camera(10.0), viewport());
    let Some(DrawCommand::Line { from, .. }) = list.commands.first() else {
        panic!("line expected");
    };
    assert!((from.x - 400.0).abs() < 1e-3);
    assert!((from.y - 300.0).abs() < 1e-3);
}

#[test]
fn positive_y_projects_upward_on_screen() {
    let graph = single(
        Primitive::LineStrip { points: vec![Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0)], color: Rgb(0) },
        Transform::default(),
    );
    let list = project(&graph, &camera(10.0), viewport());
    let Some(DrawCommand::Line { from, to, .. }) = list.commands.first() else {
        panic!("line expected");
    };
    assert!(to.y < from.y);
}

#[test]
fn segments_behind_camera_are_skipped() {
    let graph = single(
        Primitive::LineStrip { points: vec![Vec3::new(0.0, 0.0, 20.0), Vec3::new(1.0, 0.0, 20.0)], color: Rgb(0) },
        Transform::default(),
    );
    assert!(project(&graph, &camera(10.0), viewport()).commands.is_empty());
}

#[test]
fn closer_camera_spreads_points_further_apart() {
    let graph = single(
        Primitive::LineStrip { points: vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)], color: Rgb(0) },
        Transform::default(),
    );
    let width_at = |distance: f32| match project(&graph, &camera(distance), viewport()).commands.first() {
        Some(DrawCommand::Line { from, to, .. }) => (to.x - from.x).abs(),
        _ => 0.0,
    };
    assert!(width_at(10.0) > width_at(100.0));
}

#[test]
fn commands_are_sorted_far_to_near() {
    let mut graph = SceneGraph::new();
    graph.add(Transform::at(Vec3::new(0.0, 0.0, 2.0)), Primitive::Cuboid { material: Material::solid(0xff0000) });
    graph.add(Transform::at(Vec3::new(0.0, 0.0, -10.0)), Primitive::Cuboid { material: Material::solid(0x0000ff) });
    let list = project(&graph, &camera(10.0), viewport());
    let depths = list.commands.iter().map(DrawCommand::depth).collect::<Vec<_>>();
    assert!(depths.windows(2).all(|w| w[0] >= w[1]));
    let Some(DrawCommand::Quad { color, .. }) = list.commands.last() else {
        panic!("quad expected");
    };
    assert_eq!(*color, Rgb(0xff0000));
}

#[test]
fn signed_area_is_positive_for_counter_clockwise() {
    let square = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 1.0)];
    assert!((signed_area(&square) - 1.0).abs() < 1e-12);
}
