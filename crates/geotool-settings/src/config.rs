//! Configuration for the scene engine
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Appearance (highlight colors, marker look, background)
//! - Shape defaults (size of newly added shapes)
//! - Interaction (keyboard nudge step)
//! - Camera (projection kind and clip planes)

use geotool_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Colors and sizes used when drawing the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Fill color of unselected shapes
    pub default_color: Color,
    /// Fill color of the selected shape
    pub selected_color: Color,
    /// Closest-point marker color
    pub marker_color: Color,
    /// Marker radius in world units
    pub marker_radius: f64,
    /// Canvas clear color
    pub background_color: Color,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            default_color: Color::from_hex(0xeef4fc),
            selected_color: Color::from_hex(0x8efc8f),
            marker_color: Color::RED,
            marker_radius: 0.01,
            background_color: Color::from_hex(0x1e1e1e),
        }
    }
}

/// Size of shapes created by the add-shape commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    pub default_width: f64,
    pub default_height: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            default_width: 0.5,
            default_height: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Distance moved by one arrow key press, in world units
    pub nudge_step: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self { nudge_step: 0.1 }
    }
}

/// Camera projection type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Orthographic,
    Perspective,
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orthographic => write!(f, "orthographic"),
            Self::Perspective => write!(f, "perspective"),
        }
    }
}

/// Camera parameters. The camera sits on the +Z axis looking at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub projection: Projection,
    /// Near clip plane distance
    pub near: f64,
    /// Far clip plane distance
    pub far: f64,
    /// Camera distance from the z = 0 plane
    pub distance: f64,
    /// Visible world height for the orthographic projection
    pub view_height: f64,
    /// Vertical field of view for the perspective projection
    pub fov_y_degrees: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            projection: Projection::Orthographic,
            near: 0.1,
            far: 10.0,
            distance: 1.0,
            view_height: 2.0,
            fov_y_degrees: 45.0,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub appearance: AppearanceSettings,
    pub shapes: ShapeDefaults,
    pub interaction: InteractionSettings,
    pub camera: CameraSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn require_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

impl EngineConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/geotool/engine.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDirectory)?;
        Ok(base.join("geotool").join("engine.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(
                "No engine config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Saved engine config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        require_positive("appearance.marker_radius", self.appearance.marker_radius)?;

        require_positive("shapes.default_width", self.shapes.default_width)?;
        require_positive("shapes.default_height", self.shapes.default_height)?;

        require_positive("interaction.nudge_step", self.interaction.nudge_step)?;

        let camera = &self.camera;
        require_positive("camera.near", camera.near)?;
        require_positive("camera.far", camera.far)?;
        require_positive("camera.view_height", camera.view_height)?;
        if camera.near >= camera.far {
            return Err(ConfigError::Inconsistent(format!(
                "camera.near ({}) must be less than camera.far ({})",
                camera.near, camera.far
            )));
        }
        if !(camera.distance.is_finite() && camera.distance > camera.near) {
            return Err(ConfigError::Inconsistent(format!(
                "camera.distance ({}) must be greater than camera.near ({})",
                camera.distance, camera.near
            )));
        }
        if camera.distance >= camera.far {
            return Err(ConfigError::Inconsistent(format!(
                "camera.distance ({}) must be less than camera.far ({})",
                camera.distance, camera.far
            )));
        }
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(ConfigError::out_of_range(
                "camera.fov_y_degrees",
                camera.fov_y_degrees,
            ));
        }

        Ok(())
    }
}
