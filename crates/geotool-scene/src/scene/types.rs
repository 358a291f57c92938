use std::fmt;
use std::rc::Rc;

use geotool_core::{FrameClock, FrameHandle, InputBus, SubscriptionId};

use crate::model::Point;
use crate::shape::ShapeId;

/// Interaction state, derived from the active tool and the drag state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Selecting,
    Dragging,
    ClosestPointProbing,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionState::Idle => write!(f, "Idle"),
            InteractionState::Selecting => write!(f, "Selecting"),
            InteractionState::Dragging => write!(f, "Dragging"),
            InteractionState::ClosestPointProbing => write!(f, "ClosestPointProbing"),
        }
    }
}

/// An active drag gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub shape_id: ShapeId,
    /// Pointer world point at press minus shape position at press.
    pub offset: Point,
}

/// Closest-point marker position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point,
}

/// Host registrations made by `Scene::attach`, released by `dispose`.
pub(crate) struct HostBinding {
    pub bus: Rc<InputBus>,
    pub subscription: SubscriptionId,
    pub clock: Rc<FrameClock>,
    pub frame: FrameHandle,
}

impl HostBinding {
    pub fn release(self) {
        self.bus.unsubscribe(self.subscription);
        self.clock.cancel(self.frame);
    }
}

impl fmt::Debug for HostBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBinding")
            .field("subscription", &self.subscription)
            .field("frame", &self.frame)
            .finish()
    }
}
