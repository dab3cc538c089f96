//! Shared numeric constants for the scene crate.

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f32 = 75.0;

/// Near clip plane distance.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const CAMERA_FAR: f32 = 1000.0;

/// Default camera distance for panels that expose the zoom slider.
pub const DEFAULT_ZOOM: f32 = 50.0;

/// Lower bound of the zoom slider.
pub const ZOOM_MIN: f32 = 10.0;

/// Upper bound of the zoom slider.
pub const ZOOM_MAX: f32 = 100.0;

/// Camera distance for the single rotating cube.
pub const CUBE_CAMERA_DISTANCE: f32 = 5.0;

// ── Orbit controls ──────────────────────────────────────────────

/// Fraction of the pending rotation applied per update when damping is on.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.25;

/// Keeps the polar angle off the poles so `look_at` stays well defined.
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// ── Waves ───────────────────────────────────────────────────────

/// Angular rate of every animated wave, in radians per millisecond.
pub const WAVE_OMEGA_PER_MS: f64 = 0.001;

/// Bar height amplitude.
pub const BAR_AMPLITUDE: f64 = 2.0;

/// Bar height offset; keeps bars strictly positive.
pub const BAR_OFFSET: f64 = 3.0;

/// Line vertex amplitude.
pub const LINE_AMPLITUDE: f64 = 5.0;

/// Per-frame rotation increment for spinning primitives, in radians.
pub const SPIN_RATE_RAD: f32 = 0.01;

// ── Scene layout ────────────────────────────────────────────────

/// Bar colors, red through violet.
pub const RAINBOW: [u32; 7] = [0xff0000, 0xff7f00, 0xffff00, 0x00ff00, 0x0000ff, 0x4b0082, 0x9400d3];

/// Default lattice edge length for the grid of cubes.
pub const DEFAULT_GRID_CUBES: u32 = 15;

/// Default number of polylines in the line chart.
pub const DEFAULT_LINE_COUNT: u32 = 5;

/// Default number of points per polyline.
pub const DEFAULT_LINE_POINTS: u32 = 10;

/// Upper bound on lattice edge length, keeps the draw list bounded.
pub const MAX_GRID_CUBES: u32 = 64;

/// Upper bound on polylines.
pub const MAX_LINE_COUNT: u32 = 32;

/// Upper bound on points per polyline.
pub const MAX_LINE_POINTS: u32 = 256;

/// Floor grid edge length for the dashboard scene.
pub const FLOOR_GRID_SIZE: f32 = 30.0;

/// Floor grid divisions for the dashboard scene.
pub const FLOOR_GRID_DIVISIONS: u32 = 30;

/// Axis marker length for the dashboard scene.
pub const AXES_LENGTH: f32 = 15.0;

// ── Colors ──────────────────────────────────────────────────────

/// Clear color behind every frame.
pub const BACKGROUND: u32 = 0x000000;

/// Wireframe cube and solid cube color.
pub const CUBE_GREEN: u32 = 0x00ff00;

/// Polyline color.
pub const LINE_WHITE: u32 = 0xffffff;

/// Floor grid center-line color.
pub const GRID_CENTER: u32 = 0x444444;

/// Floor grid line color.
pub const GRID_LINE: u32 = 0x888888;
