//! Type system utilities and aliases.
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` sharing.

pub mod aliases;

pub use aliases::*;
