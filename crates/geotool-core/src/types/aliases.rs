//! Type aliases for single-threaded shared state.
//!
//! The engine runs on one thread and is driven by the host's event queue and
//! frame clock, so `Rc<RefCell<T>>` is the only sharing primitive needed.
//! Listener callbacks hold `Weak` handles derived from these aliases so that
//! a disposed scene is never kept alive by the host.
//!
//! ```rust,ignore
//! use geotool_core::types::*;
//!
//! let scene: Shared<Scene> = shared(Scene::new(config, tools));
//! scene.borrow_mut().add_shape(ShapeKind::Square)?;
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wraps a value in a [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
