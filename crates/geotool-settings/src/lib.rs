//! Geotool Settings Crate
//!
//! Engine configuration: appearance constants, default shape size, nudge step
//! and camera parameters, loaded from JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    AppearanceSettings, CameraSettings, EngineConfig, InteractionSettings, Projection,
    ShapeDefaults,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
