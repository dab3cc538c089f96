//! Lifecycle core of a live scene view.
//!
//! [`LiveSceneView`] owns one mount point and, while running, exactly one
//! [`Instance`]: the attached surface, the scene graph, its animation
//! bindings, the camera and the orbit controls. Everything is passed in
//! explicitly (time, viewport, parameters) so the whole lifecycle can be
//! driven from tests with a [`crate::headless::HeadlessMount`].
//!
//! ```text
//! Unmounted ─mount─▶ Initializing ─┬─▶ Running ─┐
//!     ▲                            └─▶ Placeholder (no data)
//!     └──────────── TearingDown ◀──────┘ unmount / resize / data change
//! ```
//!
//! `resize` and data changes always rebuild from scratch.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::str::FromStr;

use crate::animation::{Animated, FrameClock, animate};
use crate::camera::PerspectiveCamera;
use crate::error::SceneError;
use crate::graph::SceneGraph;
use crate::options::PanelOptions;
use crate::orbit::OrbitControls;
use crate::projection::{DrawList, project};
use crate::strategy::strategy_for;
use crate::surface::{MountPoint, RenderSurface};
use crate::viewport::Viewport;

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Initializing,
    Running,
    /// Mounted without data; the host shows its placeholder and nothing is allocated.
    Placeholder,
    TearingDown,
}

/// Whether the driver should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered,
    Stopped,
}

/// Parameters the host may bind to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Camera distance from the target.
    Zoom,
}

impl FromStr for Parameter {
    type Err = SceneError;

    fn from_str(name: &str) -> Result<Self, SceneError> {
        match name {
            "zoom" => Ok(Self::Zoom),
            other => Err(SceneError::UnknownParameter(other.to_owned())),
        }
    }
}

/// Resources owned by a running view.
struct Instance<S> {
    surface: S,
    graph: SceneGraph,
    bindings: Vec<Animated>,
    camera: PerspectiveCamera,
    /// `Some` when the camera follows the zoom parameter.
    fixed_distance: Option<f32>,
    orbit: Option<OrbitControls>,
    clock: FrameClock,
    strategy: &'static str,
}

/// A mount point plus the state machine that manages its one instance.
pub struct LiveSceneView<M: MountPoint> {
    mount: M,
    phase: Phase,
    viewport: Viewport,
    options: PanelOptions,
    rows: usize,
    zoom: f32,
    instance: Option<Instance<M::Surface>>,
}

impl<M: MountPoint> LiveSceneView<M> {
    /// Create an unmounted view. Nothing is attached until [`Self::mount`].
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOptions`] if `options` fail validation.
    pub fn new(mount: M, viewport: Viewport, options: PanelOptions) -> Result<Self, SceneError> {
        options.validate()?;
        let zoom = options.zoom;
        Ok(Self { mount, phase: Phase::Unmounted, viewport, options, rows: 0, zoom, instance: None })
    }

    // --- Lifecycle ---

    /// Mount with `rows` data rows available.
    ///
    /// With no rows the view enters [`Phase::Placeholder`] and allocates
    /// nothing. Mounting an already mounted view is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the mount point's error when the surface cannot be created.
    /// The view is left [`Phase::Unmounted`] and nothing stays attached.
    pub fn mount(&mut self, rows: usize) -> Result<(), SceneError> {
        if self.is_mounted() {
            log::debug!("scene view already mounted ({:?})", self.phase);
            return Ok(());
        }
        self.rows = rows;
        self.start()
    }

    /// Tear down: stop frames, detach the surface, drop the scene.
    ///
    /// Safe to call repeatedly and after the host removed the surface itself.
    pub fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.teardown();
    }

    /// Rebuild for a new viewport. The old surface is detached before the new one is attached.
    ///
    /// # Errors
    ///
    /// Returns the mount point's error if the rebuilt surface cannot be created;
    /// the view is then [`Phase::Unmounted`].
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), SceneError> {
        if viewport == self.viewport {
            return Ok(());
        }
        let was_mounted = self.is_mounted();
        self.teardown();
        self.viewport = viewport;
        if was_mounted { self.start() } else { Ok(()) }
    }

    /// Record a new data-row count, switching between placeholder and scene when
    /// rows appear or disappear.
    ///
    /// # Errors
    ///
    /// Returns the mount point's error if the scene has to be built and cannot be.
    pub fn set_data_rows(&mut self, rows: usize) -> Result<(), SceneError> {
        let had_data = self.rows > 0;
        self.rows = rows;
        if !self.is_mounted() || had_data == (rows > 0) {
            return Ok(());
        }
        self.teardown();
        self.start()
    }

    /// Update a bound parameter. Takes effect on the next frame.
    ///
    /// Zoom is clamped into the configured range.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownParameter`] for names the scene does not bind and
    /// [`SceneError::InvalidParameter`] for non-finite values.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), SceneError> {
        match name.parse::<Parameter>()? {
            Parameter::Zoom => {
                if !self.options.binds_zoom() {
                    return Err(SceneError::UnknownParameter(name.to_owned()));
                }
                if !value.is_finite() {
                    return Err(SceneError::InvalidParameter { name: name.to_owned(), value });
                }
                let range = self.options.zoom_range();
                self.zoom = (value as f32).clamp(*range.start(), *range.end());
            }
        }
        Ok(())
    }

    /// Feed a pointer drag to the orbit controls, if the scene has them.
    pub fn orbit_drag(&mut self, dx: f64, dy: f64) {
        let height = self.viewport.height();
        if let Some(orbit) = self.instance.as_mut().and_then(|instance| instance.orbit.as_mut()) {
            orbit.drag(dx, dy, height);
        }
    }

    // --- Frames ---

    /// Render one frame at `now_ms`.
    ///
    /// Returns [`FrameOutcome::Stopped`] without touching anything unless the
    /// view is running; the driver must not schedule another frame then.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Present`] if the surface fails to draw.
    pub fn on_frame(&mut self, now_ms: f64) -> Result<FrameOutcome, SceneError> {
        if self.phase != Phase::Running {
            return Ok(FrameOutcome::Stopped);
        }
        let zoom = self.zoom;
        let range = self.options.zoom_range();
        let Some(instance) = self.instance.as_mut() else {
            return Ok(FrameOutcome::Stopped);
        };

        let time = instance.clock.tick(now_ms);
        animate(&mut instance.graph, &instance.bindings, time);
        if instance.fixed_distance.is_none() {
            instance.camera.set_distance_clamped(zoom, &range);
        }
        if let Some(orbit) = instance.orbit.as_mut() {
            orbit.update(&mut instance.camera);
        }

        let frame = project(&instance.graph, &instance.camera, self.viewport);
        instance.surface.present(&frame)?;
        Ok(FrameOutcome::Rendered)
    }

    /// Project the current scene without advancing time.
    #[must_use]
    pub fn snapshot(&self) -> Option<DrawList> {
        let instance = self.instance.as_ref()?;
        Some(project(&instance.graph, &instance.camera, self.viewport))
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the view is mounted, with or without a scene.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Placeholder)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Current value of the zoom parameter.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn data_rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.instance.as_ref().map(|instance| &instance.camera)
    }

    #[must_use]
    pub fn graph(&self) -> Option<&SceneGraph> {
        self.instance.as_ref().map(|instance| &instance.graph)
    }

    #[must_use]
    pub fn surface(&self) -> Option<&M::Surface> {
        self.instance.as_ref().map(|instance| &instance.surface)
    }

    #[must_use]
    pub fn mount_point(&self) -> &M {
        &self.mount
    }

    pub fn mount_point_mut(&mut self) -> &mut M {
        &mut self.mount
    }

    // --- Internals ---

    fn start(&mut self) -> Result<(), SceneError> {
        self.transition(Phase::Initializing);
        if self.rows == 0 {
            self.transition(Phase::Placeholder);
            return Ok(());
        }

        let surface = match self.mount.attach(self.viewport) {
            Ok(surface) => surface,
            Err(err) => {
                log::error!("scene view failed to initialize: {err}");
                self.transition(Phase::Unmounted);
                return Err(err);
            }
        };

        let strategy = strategy_for(&self.options);
        let mut graph = SceneGraph::new();
        let bindings = strategy.build(&mut graph);
        let fixed_distance = strategy.fixed_distance();
        let range = self.options.zoom_range();
        let mut camera = PerspectiveCamera::new(self.viewport.aspect(), fixed_distance.unwrap_or(self.zoom));
        if fixed_distance.is_none() {
            camera.set_distance_clamped(self.zoom, &range);
        }
        let orbit = strategy
            .orbit()
            .then(|| OrbitControls::new(self.options.enable_damping, self.options.damping_factor));

        log::debug!(
            "scene view built {} ({} nodes, {} animated) at {}x{}",
            strategy.name(),
            graph.len(),
            bindings.len(),
            self.viewport.width(),
            self.viewport.height()
        );
        self.instance = Some(Instance {
            surface,
            graph,
            bindings,
            camera,
            fixed_distance,
            orbit,
            clock: FrameClock::new(),
            strategy: strategy.name(),
        });
        self.transition(Phase::Running);
        Ok(())
    }

    fn teardown(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.transition(Phase::TearingDown);
        if let Some(instance) = self.instance.take() {
            if !self.mount.detach(&instance.surface) {
                log::debug!("{} surface was already detached", instance.strategy);
            }
            log::debug!("{} released after {} frames", instance.strategy, instance.clock.frames());
        }
        self.transition(Phase::Unmounted);
    }

    fn transition(&mut self, next: Phase) {
        log::debug!("scene view {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

impl<M: MountPoint> Drop for LiveSceneView<M> {
    fn drop(&mut self) {
        self.unmount();
    }
}
