//! Panel components.
//!
//! `LiveScenePanel` is the only component hosts need; the others are the
//! pieces of chrome it renders around the scene.

pub mod live_scene_panel;
pub mod needs_data;
pub mod zoom_slider;
