//! Input event definitions.
//!
//! Pointer coordinates are device pixels relative to the top-left corner of
//! the host window; the scene converts them using its container bounds.

use serde::{Deserialize, Serialize};

/// Keyboard keys the engine reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Any other key, by its host key code
    Other(String),
}

impl Key {
    /// Maps a DOM-style key code ("ArrowUp", "KeyA", ...) to a `Key`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Root enum for all host input events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer button pressed
    PointerDown {
        /// Device x in pixels.
        x: f64,
        /// Device y in pixels (top-left origin, growing downwards).
        y: f64,
    },
    /// Pointer moved
    PointerMove {
        /// Device x in pixels.
        x: f64,
        /// Device y in pixels.
        y: f64,
    },
    /// Pointer button released
    PointerUp {
        /// Device x in pixels.
        x: f64,
        /// Device y in pixels.
        y: f64,
    },
    /// Key pressed
    KeyDown(Key),
    /// Rendering container resized
    Resize {
        /// New container width in pixels.
        width: f64,
        /// New container height in pixels.
        height: f64,
    },
}

impl InputEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            InputEvent::PointerDown { .. }
            | InputEvent::PointerMove { .. }
            | InputEvent::PointerUp { .. } => EventCategory::Pointer,
            InputEvent::KeyDown(_) => EventCategory::Keyboard,
            InputEvent::Resize { .. } => EventCategory::Viewport,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            InputEvent::PointerDown { x, y } => format!("pointer down at ({x:.1}, {y:.1})"),
            InputEvent::PointerMove { x, y } => format!("pointer move to ({x:.1}, {y:.1})"),
            InputEvent::PointerUp { x, y } => format!("pointer up at ({x:.1}, {y:.1})"),
            InputEvent::KeyDown(key) => format!("key down {key:?}"),
            InputEvent::Resize { width, height } => format!("resize to {width}x{height}"),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Pointer down/move/up.
    Pointer,
    /// Key presses.
    Keyboard,
    /// Container resize.
    Viewport,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Pointer => write!(f, "Pointer"),
            EventCategory::Keyboard => write!(f, "Keyboard"),
            EventCategory::Viewport => write!(f, "Viewport"),
        }
    }
}
