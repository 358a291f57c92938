//! Raster render surface backed by tiny-skia.
//!
//! Shapes are filled from their mesh triangles, the marker is drawn as a
//! filled circle on top. World points are projected with the frame's own
//! viewport so both camera projections render correctly.

use std::path::Path;

use geotool_core::{shared, Color, Shared};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{SceneError, SceneResult};
use crate::model::Point;
use crate::surface::{Frame, RenderSurface};
use crate::viewport::Viewport;

/// Marker circles never shrink below this many pixels.
const MIN_MARKER_RADIUS_PX: f32 = 2.0;

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), 255)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

/// Device position relative to the container origin.
fn to_pixel(viewport: &Viewport, p: Point) -> (f32, f32) {
    let bounds = viewport.bounds();
    let (x, y) = viewport.world_to_device(p);
    ((x - bounds.left) as f32, (y - bounds.top) as f32)
}

/// tiny-skia surface. Clones share one pixmap, so a handle kept by the
/// caller still sees what the scene drew after the surface was attached.
#[derive(Clone)]
pub struct RasterSurface {
    pixmap: Shared<Pixmap>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> SceneResult<Self> {
        let pixmap = Pixmap::new(width.max(1), height.max(1))
            .ok_or_else(|| SceneError::Render(format!("invalid pixmap size {width}x{height}")))?;
        Ok(Self {
            pixmap: shared(pixmap),
        })
    }

    /// RGB of the pixel at `(x, y)`, if inside the pixmap.
    pub fn pixel_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.pixmap
            .borrow()
            .pixel(x, y)
            .map(|c| (c.red(), c.green(), c.blue()))
    }

    pub fn encode_png(&self) -> anyhow::Result<Vec<u8>> {
        Ok(self.pixmap.borrow().encode_png()?)
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        self.pixmap.borrow().save_png(path)?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    fn draw(&self, frame: &Frame) {
        let mut pixmap = self.pixmap.borrow_mut();
        pixmap.fill(skia_color(frame.background));

        for item in &frame.items {
            let mut pb = PathBuilder::new();
            for [a, b, c] in &item.triangles {
                let (ax, ay) = to_pixel(&frame.viewport, *a);
                let (bx, by) = to_pixel(&frame.viewport, *b);
                let (cx, cy) = to_pixel(&frame.viewport, *c);
                pb.move_to(ax, ay);
                pb.line_to(bx, by);
                pb.line_to(cx, cy);
                pb.close();
            }
            if let Some(path) = pb.finish() {
                pixmap.fill_path(
                    &path,
                    &paint_for(item.color),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }

        if let Some(marker) = &frame.marker {
            let (cx, cy) = to_pixel(&frame.viewport, marker.center);
            let radius = (marker.radius / frame.viewport.world_units_per_pixel()) as f32;
            if let Some(circle) =
                PathBuilder::from_circle(cx, cy, radius.max(MIN_MARKER_RADIUS_PX))
            {
                pixmap.fill_path(
                    &circle,
                    &paint_for(marker.color),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
        }
    }
}

impl RenderSurface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        let pixmap = self.pixmap.borrow();
        (pixmap.width() as f64, pixmap.height() as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        let w = width.max(1.0).round() as u32;
        let h = height.max(1.0).round() as u32;
        match Pixmap::new(w, h) {
            Some(pixmap) => *self.pixmap.borrow_mut() = pixmap,
            None => tracing::warn!("Ignoring raster resize to {}x{}", width, height),
        }
    }

    fn present(&mut self, frame: &Frame) -> SceneResult<()> {
        let (w, h) = self.size();
        let bounds = frame.viewport.bounds();
        if (bounds.width - w).abs() > 0.5 || (bounds.height - h).abs() > 0.5 {
            return Err(SceneError::Render(format!(
                "frame is {}x{} but surface is {}x{}",
                bounds.width, bounds.height, w, h
            )));
        }
        self.draw(frame);
        Ok(())
    }
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.size();
        f.debug_struct("RasterSurface")
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}
