//! Geometry primitives.
//!
//! Parametric outlines for the three supported shape kinds. Every outline is
//! produced by [`build_polygon`], which fits the raw loop into a `w × h` box
//! centered on the local origin, so placing a shape at a world point puts the
//! center of its bounding box there.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

mod hexagon;
pub mod mesh;
mod square;
mod triangle;

pub use mesh::Mesh;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a point set. Returns `None` for an empty set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds::new(first.x, first.y, first.x, first.y);
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn translated(&self, offset: Point) -> Self {
        Bounds::new(
            self.min_x + offset.x,
            self.min_y + offset.y,
            self.max_x + offset.x,
            self.max_y + offset.y,
        )
    }
}

/// The closed set of supported shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Triangle,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Hexagon];

    /// Lowercase name used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(ShapeKind::Square),
            "triangle" => Ok(ShapeKind::Triangle),
            "hexagon" => Ok(ShapeKind::Hexagon),
            _ => Err(GeometryError::UnsupportedKind(s.to_string())),
        }
    }
}

/// Kind-specific construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeSpec {
    Square { width: f64, height: f64 },
    Triangle { width: f64, height: f64 },
    Hexagon { width: f64, height: f64 },
}

impl ShapeSpec {
    pub fn new(kind: ShapeKind, width: f64, height: f64) -> Self {
        match kind {
            ShapeKind::Square => ShapeSpec::Square { width, height },
            ShapeKind::Triangle => ShapeSpec::Triangle { width, height },
            ShapeKind::Hexagon => ShapeSpec::Hexagon { width, height },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Square { .. } => ShapeKind::Square,
            ShapeSpec::Triangle { .. } => ShapeKind::Triangle,
            ShapeSpec::Hexagon { .. } => ShapeKind::Hexagon,
        }
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (f64, f64) {
        match *self {
            ShapeSpec::Square { width, height }
            | ShapeSpec::Triangle { width, height }
            | ShapeSpec::Hexagon { width, height } => (width, height),
        }
    }

    pub fn build(&self) -> GeometryResult<(PolygonLoop, Bounds)> {
        let (width, height) = self.dimensions();
        build_polygon(self.kind(), width, height)
    }
}

/// A closed vertex loop; the last vertex implicitly joins the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonLoop {
    vertices: Vec<Point>,
}

impl PolygonLoop {
    pub fn new(vertices: Vec<Point>) -> GeometryResult<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::DegeneratePolygon(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a loop has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges `(Vi, Vi+1)` in order, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn bounds(&self) -> Bounds {
        let first = self.vertices[0];
        Bounds::from_points(&self.vertices)
            .unwrap_or_else(|| Bounds::new(first.x, first.y, first.x, first.y))
    }

    pub fn translated(&self, offset: Point) -> PolygonLoop {
        PolygonLoop {
            vertices: self.vertices.iter().map(|&p| p + offset).collect(),
        }
    }
}

/// Builds the outline for `kind`, centered on the local origin with a
/// bounding box of exactly `width × height` (up to rounding).
pub fn build_polygon(
    kind: ShapeKind,
    width: f64,
    height: f64,
) -> GeometryResult<(PolygonLoop, Bounds)> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(GeometryError::InvalidDimensions { width, height });
    }

    let raw = match kind {
        ShapeKind::Square => square::outline(width, height),
        ShapeKind::Triangle => triangle::outline(width, height),
        ShapeKind::Hexagon => hexagon::outline(width, height),
    };

    let outline = PolygonLoop::new(fit_to_box(&raw, width, height))?;
    let bounds = outline.bounds();
    Ok((outline, bounds))
}

fn fit_to_box(points: &[Point], width: f64, height: f64) -> Vec<Point> {
    let Some(raw) = Bounds::from_points(points) else {
        return Vec::new();
    };
    let center = raw.center();
    let sx = if raw.width() > 0.0 { width / raw.width() } else { 1.0 };
    let sy = if raw.height() > 0.0 { height / raw.height() } else { 1.0 };

    points
        .iter()
        .map(|p| Point::new((p.x - center.x) * sx, (p.y - center.y) * sy))
        .collect()
}

/// Projects `p` onto segment `a-b`, clamping the parameter to `[0, 1]`.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return a;
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    Point::new(a.x + ab.x * t, a.y + ab.y * t)
}
