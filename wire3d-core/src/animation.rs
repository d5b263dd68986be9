/// The animation state machine
///
/// An [`Animation`] owns everything that changes between frames: the rotation
/// angles, the frame counter and the running/terminated phase. It never sleeps
/// and never writes to a terminal, so frames can be single-stepped headless.
use tracing::{debug, info};

use crate::error::Result;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Shape;
use crate::preset::Preset;
use crate::projection::{Camera, ScreenPoint, Viewport};
use crate::raster::draw_line_with;
use crate::skin::{Skin, StrokeContext, Theme, VertexContext};
use crate::transform::{RotationState, Spin};

/// Why an animation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// SIGINT, SIGTERM or any other outside request.
    Interrupted,
    /// The configured number of frames has been drawn.
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated(StopReason),
}

#[derive(Debug)]
pub struct Animation {
    shape: Shape,
    camera: Camera,
    viewport: Viewport,
    spin: Spin,
    rotation: RotationState,
    skin: Box<dyn Skin>,
    frame: u64,
    frame_limit: Option<u64>,
    phase: Phase,
    projected: Vec<ScreenPoint>,
}

impl Animation {
    pub fn new(
        shape: Shape,
        camera: Camera,
        viewport: Viewport,
        spin: Spin,
        skin: Box<dyn Skin>,
    ) -> Self {
        let projected = Vec::with_capacity(shape.points().len());
        Self {
            shape,
            camera,
            viewport,
            spin,
            rotation: RotationState::zero(),
            skin,
            frame: 0,
            frame_limit: None,
            phase: Phase::Running,
            projected,
        }
    }

    /// Build the shape described by `preset` and dress it with `theme`.
    pub fn from_preset(preset: &Preset, theme: Theme) -> Result<Self> {
        let shape = preset.geometry.build()?;
        let viewport = Viewport::new(preset.viewport.width, preset.viewport.height)?;
        let camera = Camera::with_scales(
            preset.camera.scale_x,
            preset.camera.scale_y,
            preset.camera.distance,
        )?;
        let skin = theme.skin(shape.kind());
        Ok(Self::new(shape, camera, viewport, preset.spin, skin))
    }

    /// Stop on its own after `limit` frames. `Some(0)` never draws anything.
    pub fn with_frame_limit(mut self, limit: Option<u64>) -> Self {
        self.frame_limit = limit;
        if limit == Some(0) {
            self.phase = Phase::Terminated(StopReason::FrameLimit);
        }
        self
    }

    /// A blank buffer sized for this animation.
    pub fn frame_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(self.viewport)
    }

    /// Draw the current frame into `fb`.
    ///
    /// Order: clear, backdrop, edges, vertex markers, centre symbol. Later
    /// layers overwrite earlier ones.
    pub fn render(&mut self, fb: &mut FrameBuffer) {
        fb.clear();
        self.skin.backdrop(fb, self.frame);

        let roll = self.spin.rolls();
        self.projected.clear();
        for point in self.shape.points() {
            let rotated = self.rotation.apply(point, roll);
            self.projected.push(self.camera.project(&rotated, self.viewport));
        }

        for (index, edge) in self.shape.edges().iter().enumerate() {
            let ctx = StrokeContext {
                edge: index,
                role: edge.role,
                from: self.projected[edge.a],
                to: self.projected[edge.b],
                frame: self.frame,
            };
            draw_line_with(fb, ctx.from, ctx.to, |at| self.skin.stroke(&ctx, at));
        }

        let count = self.projected.len();
        for (index, &at) in self.projected.iter().enumerate() {
            if !self.viewport.contains(at) {
                continue;
            }
            let vertex = VertexContext {
                index,
                count,
                at,
                frame: self.frame,
            };
            if let Some(cell) = self.skin.vertex(&vertex) {
                fb.set(at, cell);
            }
        }

        let center = self.viewport.center();
        if let Some(cell) = self.skin.center(self.frame, center) {
            fb.set(center, cell);
        }
    }

    /// Move to the next frame: bump the angles and the frame counter.
    pub fn advance(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.rotation.advance(&self.spin);
        self.frame += 1;
        if self.frame_limit.is_some_and(|limit| self.frame >= limit) {
            debug!(frame = self.frame, "frame limit reached");
            self.phase = Phase::Terminated(StopReason::FrameLimit);
        }
    }

    /// Render then advance. Does nothing once terminated.
    pub fn step(&mut self, fb: &mut FrameBuffer) -> Phase {
        if self.is_running() {
            self.render(fb);
            self.advance();
        }
        self.phase
    }

    pub fn terminate(&mut self, reason: StopReason) {
        if self.phase == Phase::Running {
            info!(frame = self.frame, ?reason, "animation stopped");
            self.phase = Phase::Terminated(reason);
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames drawn so far; also the index of the next frame.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn skin(&self) -> &dyn Skin {
        self.skin.as_ref()
    }

    /// Screen positions from the last [`render`](Self::render).
    pub fn projected(&self) -> &[ScreenPoint] {
        &self.projected
    }
}
