//! # Geotool
//!
//! An interactive 2D shape-editing canvas: square, triangle and hexagon
//! shapes that can be selected, dragged, nudged and probed for their closest
//! boundary point, then serialized.
//!
//! ## Architecture
//!
//! Geotool is organized as a workspace with multiple crates:
//!
//! 1. **geotool-core** - Colors, input event bus, frame clock, shared aliases
//! 2. **geotool-settings** - Engine configuration (JSON/TOML)
//! 3. **geotool-scene** - The scene interaction engine and render surfaces
//! 4. **geotool** - This crate: logging setup, the demo session and the binary

pub mod session;

pub use geotool_core as core;
pub use geotool_scene as scene;
pub use geotool_settings as settings;

pub use geotool_core::{Color, FrameClock, InputBus, InputEvent, Key};
pub use geotool_scene::{
    RasterSurface, RecordingSurface, RenderSurface, Scene, SceneError, SceneResult, ShapeId,
    ShapeKind, Tool, ToolOutcome, Workspace,
};
pub use geotool_settings::EngineConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so stdout stays free for scene output
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
