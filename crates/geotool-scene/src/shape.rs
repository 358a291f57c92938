//! The shape entity: an outline, its mesh, a position and a fill color.
//!
//! Vertex topology is fixed at construction; only position and color change
//! afterwards.

use std::fmt;

use geotool_core::Color;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GeometryResult;
use crate::hit_test::{intersect_triangle, Intersection, Ray};
use crate::model::{
    closest_point_on_segment, Bounds, Mesh, Point, PolygonLoop, ShapeKind, ShapeSpec,
};

/// Height the boundary probe ray starts from.
const PROBE_HEIGHT: f64 = 1.0;
/// Hits closer than this along the same ray are the same point on a shared edge.
const DUPLICATE_HIT_EPSILON: f64 = 1e-9;

/// Stable identity of a shape for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", &self.0.to_string()[..8])
    }
}

/// Arrow-key nudge directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in world space (Y up).
    pub fn unit(&self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, 1.0),
            Direction::Down => Point::new(0.0, -1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    spec: ShapeSpec,
    outline: PolygonLoop,
    mesh: Mesh,
    position: Point,
    color: Color,
}

impl Shape {
    /// Builds the outline and mesh for `spec`. The shape starts at the origin.
    pub fn new(spec: ShapeSpec, color: Color) -> GeometryResult<Self> {
        let (outline, _) = spec.build()?;
        let mesh = Mesh::from_outline(&outline)?;
        Ok(Self {
            id: ShapeId::new(),
            spec,
            outline,
            mesh,
            position: Point::ORIGIN,
            color,
        })
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.spec.kind()
    }

    pub fn width(&self) -> f64 {
        self.spec.dimensions().0
    }

    pub fn height(&self) -> f64 {
        self.spec.dimensions().1
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the center of the shape to `position` (absolute).
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Moves the shape by `step` world units along `direction`.
    pub fn nudge(&mut self, direction: Direction, step: f64) {
        let unit = direction.unit();
        self.position += Point::new(unit.x * step, unit.y * step);
    }

    /// Outline offset by the current position.
    pub fn world_outline(&self) -> PolygonLoop {
        self.outline.translated(self.position)
    }

    pub fn world_vertices(&self) -> Vec<Point> {
        self.world_outline().vertices().to_vec()
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Bounds {
        self.outline.bounds().translated(self.position)
    }

    pub fn world_triangles(&self) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.mesh.triangles(self.position)
    }

    /// Intersections of `ray` with the shape's current mesh, nearest first.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection> {
        let lift = |p: Point| DVec3::new(p.x, p.y, 0.0);

        let mut hits: Vec<Intersection> = self
            .world_triangles()
            .filter_map(|[a, b, c]| {
                intersect_triangle(ray, lift(a), lift(b), lift(c)).map(|distance| Intersection {
                    point: ray.at(distance),
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.dedup_by(|later, earlier| {
            (later.distance - earlier.distance).abs() < DUPLICATE_HIT_EPSILON
        });
        hits
    }

    /// Closest point on the shape to `query`.
    ///
    /// Inside the shape this is the probe hit itself. Outside, every edge of
    /// the world outline is checked and the first edge with the minimum
    /// squared distance wins.
    pub fn nearest_boundary_point(&self, query: Point) -> Point {
        if let Some(hit) = self.intersect(&Ray::vertical(query, PROBE_HEIGHT)).first() {
            return hit.world_point();
        }

        let mut best = self.outline.vertices()[0] + self.position;
        let mut best_distance = f64::INFINITY;
        for (a, b) in self.world_outline().edges() {
            let candidate = closest_point_on_segment(query, a, b);
            let distance = candidate.distance_squared_to(&query);
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }
}
