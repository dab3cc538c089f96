//! Per-frame scheduling decision of the frame loop.
//!
//! The browser loop in [`crate::engine`] owns the `requestAnimationFrame`
//! plumbing; whether a successor frame is requested is decided here, away
//! from the DOM, so it can be driven with a headless mount.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::{Cell, RefCell};

use crate::surface::MountPoint;
use crate::view::{FrameOutcome, LiveSceneView};

/// What the loop does after a frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextFrame {
    Schedule,
    Halt,
}

/// Run one frame if the loop is still `active` and decide whether to request another.
///
/// A stopped loop renders nothing. A view that reports
/// [`FrameOutcome::Stopped`] or fails to present clears `active`, so a
/// frame already in flight during teardown never schedules a successor.
pub fn step_frame<M: MountPoint>(active: &Cell<bool>, view: &RefCell<LiveSceneView<M>>, now_ms: f64) -> NextFrame {
    if !active.get() {
        return NextFrame::Halt;
    }
    let outcome = view.borrow_mut().on_frame(now_ms);
    match outcome {
        Ok(FrameOutcome::Rendered) => NextFrame::Schedule,
        Ok(FrameOutcome::Stopped) => {
            active.set(false);
            NextFrame::Halt
        }
        Err(err) => {
            log::error!("scene frame failed: {err}");
            active.set(false);
            NextFrame::Halt
        }
    }
}
