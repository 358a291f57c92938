//! Active tool state.
//!
//! The tool is chosen by the surrounding shell, not by the scene. The scene
//! only reads it, through [`ToolStateReader`], once per input event.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;
use crate::model::ShapeKind;

/// Mutually exclusive editor modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    Select,
    Move,
    ClosestPoint,
    /// Adds a shape of the given kind when chosen
    Add(ShapeKind),
    Save,
    #[default]
    None,
}

impl Tool {
    /// Tools that edit existing shapes, in menu order.
    pub const EDIT_TOOLS: [Tool; 3] = [Tool::Select, Tool::Move, Tool::ClosestPoint];

    /// Tools that add shapes, plus save, in menu order.
    pub const ADDITION_TOOLS: [Tool; 4] = [
        Tool::Add(ShapeKind::Triangle),
        Tool::Add(ShapeKind::Square),
        Tool::Add(ShapeKind::Hexagon),
        Tool::Save,
    ];

    /// Menu title.
    pub fn title(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Move => "Move",
            Tool::ClosestPoint => "Closest points",
            Tool::Add(ShapeKind::Triangle) => "Triangle",
            Tool::Add(ShapeKind::Square) => "Square",
            Tool::Add(ShapeKind::Hexagon) => "Hexagon",
            Tool::Save => "Save",
            Tool::None => "None",
        }
    }

    /// Command identifier, e.g. `move` or `add-square`.
    pub fn identifier(&self) -> String {
        match self {
            Tool::Select => "select".to_string(),
            Tool::Move => "move".to_string(),
            Tool::ClosestPoint => "closest-point".to_string(),
            Tool::Add(kind) => format!("add-{}", kind),
            Tool::Save => "save".to_string(),
            Tool::None => "none".to_string(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

impl FromStr for Tool {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "select" => Ok(Tool::Select),
            "move" => Ok(Tool::Move),
            "closest-point" | "closest-points" => Ok(Tool::ClosestPoint),
            "save" => Ok(Tool::Save),
            "none" => Ok(Tool::None),
            other => match other.strip_prefix("add-") {
                Some(kind) => kind.parse().map(Tool::Add),
                None => Err(GeometryError::UnsupportedKind(s.to_string())),
            },
        }
    }
}

/// Read access to the active tool.
pub trait ToolStateReader {
    fn active_tool(&self) -> Tool;
}

/// Single-threaded holder of the active tool, shared between the shell and the scene.
#[derive(Debug, Default)]
pub struct ToolStore {
    active: Cell<Tool>,
}

impl ToolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_tool(&self, tool: Tool) {
        let previous = self.active.replace(tool);
        if previous != tool {
            tracing::debug!("Active tool {} -> {}", previous, tool);
        }
    }
}

impl ToolStateReader for ToolStore {
    fn active_tool(&self) -> Tool {
        self.active.get()
    }
}
