//! Renderable triangle mesh for a shape outline.
//!
//! Outlines are tessellated once with lyon when a shape is created; the mesh
//! lives in local coordinates and is offset by the shape position on demand.

use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

use super::{Point, PolygonLoop};
use crate::error::{GeometryError, GeometryResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point>,
    indices: Vec<u16>,
}

impl Mesh {
    /// Tessellates a closed outline into triangles.
    pub fn from_outline(outline: &PolygonLoop) -> GeometryResult<Self> {
        let mut builder = Path::builder();
        for (i, p) in outline.vertices().iter().enumerate() {
            let p = point(p.x as f32, p.y as f32);
            if i == 0 {
                builder.begin(p);
            } else {
                builder.line_to(p);
            }
        }
        builder.close();
        let path = builder.build();

        let mut buffers: VertexBuffers<lyon::math::Point, u16> = VertexBuffers::new();
        let mut tessellator = FillTessellator::new();
        tessellator
            .tessellate_path(
                &path,
                &FillOptions::default(),
                &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| v.position()),
            )
            .map_err(|e| GeometryError::Tessellation(format!("{:?}", e)))?;

        if buffers.indices.is_empty() {
            return Err(GeometryError::Tessellation(
                "outline produced no triangles".to_string(),
            ));
        }

        Ok(Self {
            vertices: buffers
                .vertices
                .iter()
                .map(|v| Point::new(v.x as f64, v.y as f64))
                .collect(),
            indices: buffers.indices,
        })
    }

    /// Triangles offset by `offset`, in index order.
    pub fn triangles(&self, offset: Point) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize] + offset,
                self.vertices[tri[1] as usize] + offset,
                self.vertices[tri[2] as usize] + offset,
            ]
        })
    }

    /// Sum of triangle areas.
    pub fn area(&self) -> f64 {
        self.triangles(Point::ORIGIN)
            .map(|[a, b, c]| ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0)
            .sum()
    }
}
