//! Error handling for Geotool core types
//!
//! Errors raised by the leaf types of this crate. Higher layers wrap these
//! in their own `thiserror` enums via `#[from]`.

use thiserror::Error;

/// Main error type for Geotool core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A color string could not be parsed
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
