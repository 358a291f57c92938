//! Render surface abstraction and the per-frame draw list.
//!
//! The scene builds a [`Frame`] on every clock tick and hands it to whatever
//! surface it was attached to. [`RecordingSurface`] keeps the frames for
//! inspection; [`RasterSurface`](crate::raster::RasterSurface) draws them.

use std::rc::Rc;

use geotool_core::{shared, Color, Shared};

use crate::error::SceneResult;
use crate::model::{Point, ShapeKind};
use crate::shape::ShapeId;
use crate::viewport::Viewport;

/// One shape in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub shape_id: ShapeId,
    pub kind: ShapeKind,
    pub color: Color,
    /// World-space mesh triangles.
    pub triangles: Vec<[Point; 3]>,
    /// World-space outline.
    pub outline: Vec<Point>,
}

/// Closest-point marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerItem {
    pub center: Point,
    /// Radius in world units.
    pub radius: f64,
    pub color: Color,
}

/// Everything drawn in one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame clock counter, or 0 when rendered outside the clock.
    pub number: u64,
    pub viewport: Viewport,
    pub background: Color,
    pub items: Vec<DrawItem>,
    pub marker: Option<MarkerItem>,
}

/// A drawable target the scene renders into.
pub trait RenderSurface {
    /// Current size in device pixels.
    fn size(&self) -> (f64, f64);

    /// Called when the host container is resized.
    fn resize(&mut self, width: f64, height: f64);

    /// Draws a complete frame.
    fn present(&mut self, frame: &Frame) -> SceneResult<()>;
}

/// Frames seen by a [`RecordingSurface`].
#[derive(Debug, Default)]
pub struct FrameLog {
    pub frames_presented: u64,
    pub last_frame: Option<Frame>,
    pub resizes: Vec<(f64, f64)>,
}

/// Headless surface that records what it is asked to draw.
#[derive(Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    log: Shared<FrameLog>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            log: shared(FrameLog::default()),
        }
    }

    /// Handle to the log that stays valid after the surface is moved into a scene.
    pub fn log(&self) -> Shared<FrameLog> {
        Rc::clone(&self.log)
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.log.borrow_mut().resizes.push((width, height));
    }

    fn present(&mut self, frame: &Frame) -> SceneResult<()> {
        let mut log = self.log.borrow_mut();
        log.frames_presented += 1;
        log.last_frame = Some(frame.clone());
        Ok(())
    }
}
