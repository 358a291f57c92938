//! # Geotool Core
//!
//! Core types shared by every Geotool crate.
//! Provides colors, the unified error type, the single-threaded input event
//! bus and the frame clock that drives the render loop.

pub mod color;
pub mod error;
pub mod event_bus;
pub mod frame_clock;
pub mod types;

pub use color::Color;
pub use error::{Error, Result};

pub use event_bus::{EventCategory, EventFilter, InputBus, InputEvent, Key, SubscriptionId};
pub use frame_clock::{FrameClock, FrameHandle};

pub use types::{shared, Shared};
