//! # Input Event Bus
//!
//! Single-threaded publish/subscribe channel between the host runtime and the
//! scene engine. The host publishes pointer, keyboard and resize events in
//! arrival order; subscribers receive them synchronously, one at a time.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geotool_core::event_bus::{EventCategory, EventFilter, InputBus, InputEvent};
//!
//! let bus = InputBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Pointer]),
//!     |event| tracing::debug!("pointer: {}", event.description()),
//! );
//!
//! bus.publish(InputEvent::PointerDown { x: 10.0, y: 20.0 });
//!
//! // Unsubscribe when the owning view goes away
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
