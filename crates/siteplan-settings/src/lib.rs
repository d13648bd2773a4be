//! SitePlan Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, EditorSettings, RenderSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
