//! Frame clock driving the render loop.
//!
//! The host calls [`FrameClock::tick`] once per display refresh. Callbacks are
//! registered once and keep firing every tick until they are cancelled; there
//! is no self-rescheduling and no implicit timeout.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use uuid::Uuid;

/// Handle for a registered frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(Uuid);

impl std::fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame({})", &self.0.to_string()[..8])
    }
}

type FrameCallback = Rc<dyn Fn(u64)>;

#[derive(Default)]
pub struct FrameClock {
    callbacks: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    frame: Cell<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked on every tick with the frame number.
    pub fn request<F>(&self, callback: F) -> FrameHandle
    where
        F: Fn(u64) + 'static,
    {
        let handle = FrameHandle(Uuid::new_v4());
        self.callbacks.borrow_mut().push((handle, Rc::new(callback)));
        tracing::debug!("{} requested", handle);
        handle
    }

    /// Cancels a callback. Returns false if the handle was not live.
    pub fn cancel(&self, handle: FrameHandle) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        let before = callbacks.len();
        callbacks.retain(|(h, _)| *h != handle);
        let removed = callbacks.len() != before;
        if removed {
            tracing::debug!("{} cancelled", handle);
        }
        removed
    }

    pub fn is_active(&self, handle: FrameHandle) -> bool {
        self.callbacks.borrow().iter().any(|(h, _)| *h == handle)
    }

    pub fn active_count(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Number of ticks so far.
    pub fn frame(&self) -> u64 {
        self.frame.get()
    }

    /// Advances one frame and runs every live callback once.
    ///
    /// Returns how many callbacks ran.
    pub fn tick(&self) -> usize {
        let frame = self.frame.get() + 1;
        self.frame.set(frame);

        let pending: Vec<(FrameHandle, FrameCallback)> = self
            .callbacks
            .borrow()
            .iter()
            .map(|(h, cb)| (*h, Rc::clone(cb)))
            .collect();

        let mut ran = 0;
        for (handle, callback) in pending {
            if self.is_active(handle) {
                callback(frame);
                ran += 1;
            }
        }
        ran
    }
}

impl std::fmt::Debug for FrameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameClock")
            .field("frame", &self.frame.get())
            .field("active", &self.active_count())
            .finish()
    }
}
