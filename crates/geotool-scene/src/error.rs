//! Error types for the scene engine.
//!
//! Geometry errors are raised while building shapes; scene errors cover the
//! engine lifecycle and rendering.

use thiserror::Error;

/// Errors that can occur while building shape geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The requested shape kind is not one of square, triangle or hexagon.
    #[error("Unsupported shape kind: {0}")]
    UnsupportedKind(String),

    /// Width or height is not a positive finite number.
    #[error("Invalid dimensions {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// The outline has fewer than three vertices.
    #[error("Degenerate polygon with {0} vertices")]
    DegeneratePolygon(usize),

    /// The outline could not be tessellated into a mesh.
    #[error("Tessellation failed: {0}")]
    Tessellation(String),
}

/// Errors raised by the scene engine.
#[derive(Error, Debug)]
pub enum SceneError {
    /// An operation that needs the projection ran before a surface was attached.
    #[error("No render surface attached to the scene")]
    SurfaceNotAttached,

    /// Shape geometry could not be built.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Scene records could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The render surface failed to present a frame.
    #[error("Render error: {0}")]
    Render(String),
}

impl SceneError {
    /// Returns true for programmer errors that must not be swallowed.
    pub fn is_precondition(&self) -> bool {
        matches!(self, SceneError::SurfaceNotAttached)
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Result type alias for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;
