//! Camera mapping between device pixels and world coordinates.
//!
//! The camera sits on the +Z axis at `distance`, looking at the origin with
//! +Y up. Device coordinates have their origin at the top-left corner of the
//! window and grow downwards; the container bounds locate the canvas inside
//! the window.
//!
//! Both projections share one code path: the pointer is turned into a ray by
//! unprojecting the near and far clip planes through the inverse
//! view-projection matrix, and the world point is where that ray meets z = 0.

use glam::{DMat4, DVec3};
use geotool_settings::{CameraSettings, Projection};

use crate::hit_test::Ray;
use crate::model::Point;

/// Smallest container edge accepted, in pixels.
const MIN_CONTAINER_EDGE: f64 = 1.0;

/// Rendering container rectangle, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Container at the window origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    fn clamped(self) -> Self {
        let width = clamp_edge(self.width);
        let height = clamp_edge(self.height);
        if width != self.width || height != self.height {
            tracing::warn!(
                "Degenerate container {}x{}, clamping to {}x{}",
                self.width,
                self.height,
                width,
                height
            );
        }
        Self {
            width,
            height,
            ..self
        }
    }
}

fn clamp_edge(edge: f64) -> f64 {
    if edge.is_finite() && edge >= MIN_CONTAINER_EDGE {
        edge
    } else {
        MIN_CONTAINER_EDGE
    }
}

/// Projection state for the current container size.
#[derive(Debug, Clone)]
pub struct Viewport {
    bounds: ContainerBounds,
    camera: CameraSettings,
    view_projection: DMat4,
    inverse_view_projection: DMat4,
}

impl Viewport {
    pub fn new(bounds: ContainerBounds, camera: CameraSettings) -> Self {
        let mut viewport = Self {
            bounds: bounds.clamped(),
            camera,
            view_projection: DMat4::IDENTITY,
            inverse_view_projection: DMat4::IDENTITY,
        };
        viewport.rebuild();
        viewport
    }

    pub fn bounds(&self) -> ContainerBounds {
        self.bounds
    }

    pub fn camera(&self) -> &CameraSettings {
        &self.camera
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.bounds.width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.bounds.height
    }

    pub fn aspect(&self) -> f64 {
        self.bounds.width / self.bounds.height
    }

    /// Replaces the container rectangle and rebuilds the projection.
    pub fn set_container(&mut self, bounds: ContainerBounds) {
        self.bounds = bounds.clamped();
        self.rebuild();
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.set_container(ContainerBounds {
            width,
            height,
            ..self.bounds
        });
    }

    /// Half width and half height of the visible region on the z = 0 plane.
    pub fn half_extents(&self) -> (f64, f64) {
        let half_height = match self.camera.projection {
            Projection::Orthographic => self.camera.view_height / 2.0,
            Projection::Perspective => {
                self.camera.distance * (self.camera.fov_y_degrees.to_radians() / 2.0).tan()
            }
        };
        (half_height * self.aspect(), half_height)
    }

    fn rebuild(&mut self) {
        let camera = &self.camera;
        let view = DMat4::look_at_rh(
            DVec3::new(0.0, 0.0, camera.distance),
            DVec3::ZERO,
            DVec3::Y,
        );
        let projection = match camera.projection {
            Projection::Orthographic => {
                let half_height = camera.view_height / 2.0;
                let half_width = half_height * self.aspect();
                DMat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    camera.near,
                    camera.far,
                )
            }
            Projection::Perspective => DMat4::perspective_rh_gl(
                camera.fov_y_degrees.to_radians(),
                self.aspect(),
                camera.near,
                camera.far,
            ),
        };

        self.view_projection = projection * view;
        self.inverse_view_projection = self.view_projection.inverse();
    }

    /// Normalized device coordinates in `[-1, 1]`, Y up.
    pub fn device_to_ndc(&self, device_x: f64, device_y: f64) -> (f64, f64) {
        let nx = ((device_x - self.bounds.left) / self.bounds.width) * 2.0 - 1.0;
        let ny = -((device_y - self.bounds.top) / self.bounds.height) * 2.0 + 1.0;
        (nx, ny)
    }

    /// Pointer ray from the camera eye through the pointer.
    ///
    /// Hit distances along it are eye distances, so they compare directly with
    /// the camera clip planes. Orthographic rays start on the eye plane above
    /// the pointer.
    pub fn device_to_ray(&self, device_x: f64, device_y: f64) -> Ray {
        let (nx, ny) = self.device_to_ndc(device_x, device_y);
        let near = self
            .inverse_view_projection
            .project_point3(DVec3::new(nx, ny, -1.0));
        let far = self
            .inverse_view_projection
            .project_point3(DVec3::new(nx, ny, 1.0));
        let eye = match self.camera.projection {
            Projection::Orthographic => DVec3::new(near.x, near.y, self.camera.distance),
            Projection::Perspective => DVec3::new(0.0, 0.0, self.camera.distance),
        };
        Ray::new(eye, far - eye)
    }

    /// World point under the pointer on the z = 0 plane.
    pub fn device_to_world(&self, device_x: f64, device_y: f64) -> Point {
        let ray = self.device_to_ray(device_x, device_y);
        if ray.direction.z.abs() < f64::EPSILON {
            return Point::new(ray.origin.x, ray.origin.y);
        }
        let hit = ray.at(-ray.origin.z / ray.direction.z);
        Point::new(hit.x, hit.y)
    }

    /// Device pixel position of a world point on the z = 0 plane.
    pub fn world_to_device(&self, world: Point) -> (f64, f64) {
        let ndc = self
            .view_projection
            .project_point3(DVec3::new(world.x, world.y, 0.0));
        (
            self.bounds.left + (ndc.x + 1.0) / 2.0 * self.bounds.width,
            self.bounds.top + (1.0 - ndc.y) / 2.0 * self.bounds.height,
        )
    }

    /// World units covered by one device pixel at the z = 0 plane.
    pub fn world_units_per_pixel(&self) -> f64 {
        let (_, half_height) = self.half_extents();
        2.0 * half_height / self.bounds.height
    }
}

/// One-shot mapping from a device position to a world point.
pub fn device_to_world(
    device_x: f64,
    device_y: f64,
    bounds: ContainerBounds,
    camera: &CameraSettings,
) -> Point {
    Viewport::new(bounds, camera.clone()).device_to_world(device_x, device_y)
}
