//! Configuration and settings management for SitePlan
//!
//! Provides configuration file handling and validation for the plan
//! editor. Supports JSON and TOML file formats stored in the platform
//! config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (logical size, grid pitch, default scale)
//! - Editor behaviour (history depth, prompts, pick tolerance)
//! - Render preferences (grid visibility, backdrop, labels)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use siteplan_core::constants::{
    BACKDROP_OPACITY, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_PITCH,
    DEFAULT_HISTORY_DEPTH, DEFAULT_ROOM_NAME, HIT_TOLERANCE,
};
use siteplan_core::PlanScale;
use std::path::{Path, PathBuf};

/// Config file name inside the application config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Logical canvas width in pixels
    pub width: u32,
    /// Logical canvas height in pixels
    pub height: u32,
    /// Snapping unit for new plans, in pixels
    pub grid_pitch: u32,
    /// Scale selected for new plans
    pub default_scale: PlanScale,
    /// Clamp pointer positions to the canvas bounds
    pub clamp_to_canvas: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            grid_pitch: DEFAULT_GRID_PITCH,
            default_scale: PlanScale::default(),
            clamp_to_canvas: false,
        }
    }
}

/// Editor behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of undoable steps
    pub history_depth: usize,
    /// Pre-filled answer of the room name prompt
    pub default_room_name: String,
    /// Pick radius of the select tool in pixels
    pub hit_tolerance: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_room_name: DEFAULT_ROOM_NAME.to_string(),
            hit_tolerance: HIT_TOLERANCE,
        }
    }
}

/// Render preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Draw the background grid
    pub show_grid: bool,
    /// Opacity of an imported backdrop image (0.0 - 1.0)
    pub backdrop_opacity: f32,
    /// Font family used for room and measurement labels
    pub label_font_family: String,
    /// Room label size in pixels
    pub room_label_size: f32,
    /// Measurement label size in pixels
    pub measurement_label_size: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            backdrop_opacity: BACKDROP_OPACITY,
            label_font_family: "Arial".to_string(),
            room_label_size: 12.0,
            measurement_label_size: 10.0,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas settings
    pub canvas: CanvasSettings,
    /// Editor behaviour
    pub editor: EditorSettings,
    /// Render preferences
    pub render: RenderSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location (`<config dir>/siteplan/config.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("siteplan").join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "canvas".to_string(),
                reason: "canvas dimensions must be > 0".to_string(),
            });
        }

        if self.canvas.grid_pitch == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "canvas.grid_pitch".to_string(),
                reason: "grid pitch must be > 0".to_string(),
            });
        }

        if self.editor.hit_tolerance < 0.0 || !self.editor.hit_tolerance.is_finite() {
            return Err(ConfigError::ValueOutOfRange {
                key: "editor.hit_tolerance".to_string(),
                value: self.editor.hit_tolerance.to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.render.backdrop_opacity) {
            return Err(ConfigError::ValueOutOfRange {
                key: "render.backdrop_opacity".to_string(),
                value: self.render.backdrop_opacity.to_string(),
            }
            .into());
        }

        if self.render.room_label_size <= 0.0 || self.render.measurement_label_size <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "render".to_string(),
                reason: "label sizes must be > 0".to_string(),
            });
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}
