//! Seams between the lifecycle core and whatever displays the pixels.
//!
//! A [`MountPoint`] is the host container; it hands out surfaces sized to a
//! viewport and takes them back. A [`RenderSurface`] presents one
//! [`DrawList`] per frame. The browser implementation lives in
//! [`crate::canvas`], the off-screen one in [`crate::headless`].

use crate::error::SceneError;
use crate::projection::DrawList;
use crate::viewport::Viewport;

/// The container a view's surface is attached to.
pub trait MountPoint {
    type Surface: RenderSurface;

    /// Create a surface sized to `viewport` and attach it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::RenderContextUnavailable`] when no drawing
    /// context can be obtained, or [`SceneError::Browser`] when attaching fails.
    /// Nothing stays attached on error.
    fn attach(&mut self, viewport: Viewport) -> Result<Self::Surface, SceneError>;

    /// Detach `surface`. Returns `false` if it was no longer attached.
    fn detach(&mut self, surface: &Self::Surface) -> bool;
}

/// An attached drawing target.
pub trait RenderSurface {
    fn viewport(&self) -> Viewport;

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Present`] if drawing fails.
    fn present(&mut self, frame: &DrawList) -> Result<(), SceneError>;
}
