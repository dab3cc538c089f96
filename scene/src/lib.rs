//! Live 3D scene view for dashboard panels.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of one rendered view: attaching a surface to a host
//! container, building a small scene graph from a pluggable strategy,
//! animating it once per display refresh, and releasing everything on
//! teardown. The host layer (see the `panel` crate) only supplies size,
//! options and data readiness.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | Lifecycle state machine and testable [`view::LiveSceneView`] |
//! | [`engine`] | Browser driver: [`engine::SceneEngine`] plus the `requestAnimationFrame` loop |
//! | [`scheduler`] | Whether the frame loop requests another frame |
//! | [`graph`] | Scene graph arena, transforms and primitives |
//! | [`strategy`] | Scene-construction strategies (grid, bars, lines, cube, dashboard) |
//! | [`animation`] | Frame clock and time-driven mutations |
//! | [`camera`] | Perspective camera and screen-space points |
//! | [`orbit`] | Orbit controls with damping |
//! | [`projection`] | Scene graph to screen-space [`projection::DrawList`] |
//! | [`surface`] | Mount point / surface traits |
//! | [`canvas`] | `<canvas>` mount point and surface |
//! | [`headless`] | Off-screen mount point used by tests and display-less hosts |
//! | [`render`] | Canvas2D painter for draw lists |
//! | [`options`] | Host-supplied panel options |
//! | [`viewport`] | Pixel dimensions |
//! | [`error`] | Error type |
//! | [`consts`] | Shared numeric constants (camera, waves, zoom limits) |

pub mod animation;
pub mod camera;
pub mod canvas;
pub mod consts;
pub mod engine;
pub mod error;
pub mod graph;
pub mod headless;
pub mod options;
pub mod orbit;
pub mod projection;
pub mod render;
pub mod scheduler;
pub mod strategy;
pub mod surface;
pub mod view;
pub mod viewport;
