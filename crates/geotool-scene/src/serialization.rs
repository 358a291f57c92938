//! Flat scene serialization.
//!
//! A scene is written as a JSON array of shape records in add order:
//!
//! ```json
//! [{"type": "square", "width": 0.5, "height": 0.5,
//!   "position": {"x": 0.0, "y": 0.0, "z": 0.0}, "color": "#eef4fc"}]
//! ```
//!
//! Reading back stops at the record level: [`read_records`] parses and
//! filters records but nothing rebuilds a scene from them yet.

use geotool_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::SceneResult;
use crate::model::ShapeKind;
use crate::shape::Shape;

/// Serialized position. Shapes live on the z = 0 plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordPosition {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Serialized shape geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Shape kind name; kept as text so newer kinds survive a read.
    #[serde(rename = "type")]
    pub kind: String,
    pub width: f64,
    pub height: f64,
    pub position: RecordPosition,
    pub color: Color,
}

impl ShapeRecord {
    pub fn from_shape(shape: &Shape) -> Self {
        let position = shape.position();
        Self {
            kind: shape.kind().as_str().to_string(),
            width: shape.width(),
            height: shape.height(),
            position: RecordPosition {
                x: position.x,
                y: position.y,
                z: 0.0,
            },
            color: shape.color(),
        }
    }

    /// The record's kind, if this build knows it.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.kind.parse().ok()
    }
}

pub fn records<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Vec<ShapeRecord> {
    shapes.into_iter().map(ShapeRecord::from_shape).collect()
}

pub fn to_json<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> SceneResult<String> {
    Ok(serde_json::to_string(&records(shapes))?)
}

/// Parses a record array, skipping records whose `type` is unknown.
pub fn read_records(json: &str) -> SceneResult<Vec<ShapeRecord>> {
    let records: Vec<ShapeRecord> = serde_json::from_str(json)?;
    let total = records.len();

    let known: Vec<ShapeRecord> = records
        .into_iter()
        .filter(|record| {
            let known = record.shape_kind().is_some();
            if !known {
                tracing::warn!("Skipping record with unknown type '{}'", record.kind);
            }
            known
        })
        .collect();

    if known.len() != total {
        tracing::debug!("Read {} of {} shape records", known.len(), total);
    }
    Ok(known)
}
