//! Off-screen mount point.
//!
//! Keeps the last presented [`DrawList`] instead of pixels. Tests use it to
//! observe attach/detach and frame output; hosts without a display can use
//! it to run the same lifecycle. It can be told to refuse contexts, which
//! models a machine without graphics support, or to lose them after attach.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use crate::error::SceneError;
use crate::projection::DrawList;
use crate::surface::{MountPoint, RenderSurface};
use crate::viewport::Viewport;

/// Identity of a headless surface within its mount.
pub type SurfaceId = u64;

/// Attach and detach calls in the order the mount saw them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountEvent {
    Attached(SurfaceId),
    Detached(SurfaceId),
}

#[derive(Debug, Default)]
pub struct HeadlessMount {
    attached: Vec<SurfaceId>,
    events: Vec<MountEvent>,
    next_id: SurfaceId,
    attach_count: usize,
    detach_count: usize,
    refuse_context: bool,
    lose_context: bool,
}

impl HeadlessMount {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mount whose every `attach` fails as if no graphics context exists.
    #[must_use]
    pub fn without_graphics() -> Self {
        Self { refuse_context: true, ..Self::default() }
    }

    /// A mount whose surfaces attach but fail every `present`, as after a lost context.
    #[must_use]
    pub fn with_lost_context() -> Self {
        Self { lose_context: true, ..Self::default() }
    }

    /// Surfaces currently attached, oldest first.
    #[must_use]
    pub fn attached(&self) -> &[SurfaceId] {
        &self.attached
    }

    #[must_use]
    pub fn events(&self) -> &[MountEvent] {
        &self.events
    }

    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    #[must_use]
    pub fn detach_count(&self) -> usize {
        self.detach_count
    }

    /// Drop a surface behind the view's back, as a host tearing down its DOM would.
    pub fn remove_externally(&mut self, id: SurfaceId) {
        self.attached.retain(|attached| *attached != id);
    }
}

impl MountPoint for HeadlessMount {
    type Surface = HeadlessSurface;

    fn attach(&mut self, viewport: Viewport) -> Result<HeadlessSurface, SceneError> {
        if self.refuse_context {
            return Err(SceneError::RenderContextUnavailable("headless mount has no graphics".into()));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.attach_count += 1;
        self.attached.push(id);
        self.events.push(MountEvent::Attached(id));
        Ok(HeadlessSurface { id, viewport, presented: 0, last_frame: None, lost: self.lose_context })
    }

    fn detach(&mut self, surface: &HeadlessSurface) -> bool {
        let before = self.attached.len();
        self.attached.retain(|attached| *attached != surface.id);
        let removed = self.attached.len() < before;
        if removed {
            self.detach_count += 1;
            self.events.push(MountEvent::Detached(surface.id));
        }
        removed
    }
}

#[derive(Debug)]
pub struct HeadlessSurface {
    id: SurfaceId,
    viewport: Viewport,
    presented: u64,
    last_frame: Option<DrawList>,
    lost: bool,
}

impl HeadlessSurface {
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Frames presented so far.
    #[must_use]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&DrawList> {
        self.last_frame.as_ref()
    }
}

impl RenderSurface for HeadlessSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, frame: &DrawList) -> Result<(), SceneError> {
        if self.lost {
            return Err(SceneError::Present("headless context lost".into()));
        }
        if frame.viewport != self.viewport {
            return Err(SceneError::Present(format!(
                "frame is {}x{} but surface is {}x{}",
                frame.viewport.width(),
                frame.viewport.height(),
                self.viewport.width(),
                self.viewport.height()
            )));
        }
        self.presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
