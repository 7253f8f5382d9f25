// SPDX-License-Identifier: MPL-2.0
//! This module handles the snack bar configuration, loading and saving style
//! overrides from a `snackbar.toml` file.
//!
//! # Configuration Sections
//!
//! - `[style]` - Colors, fonts, paddings and corner radius
//! - `[timing]` - Default display duration
//!
//! Colors accept `#RRGGBB`, `#RRGGBBAA` or a palette token name such as
//! `"bg-snackbar"`. Unset fields keep their default value.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SNACK_BAR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use snack_bar::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.style.background = Some("info-700".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::ui::fonts::FontFamily;
use crate::ui::snack_bar::{DisplayDuration, Style};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "snackbar.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Style overrides applied on top of [`Style::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleConfig {
    /// Snack bar background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Message text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    /// Action title color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text_color: Option<String>,

    /// Opacity applied to the action title color (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_text_alpha: Option<f32>,

    /// Message font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFamily>,

    /// Message font size in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Action font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_font: Option<FontFamily>,

    /// Action font size in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_font_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,

    /// Gap between the snack bar and the host's safe area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,

    /// Inset of the content inside the snack bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_view_padding: Option<f32>,

    /// Gap between icon, message and action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,

    /// Maximum number of message lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u8>,
}

/// Timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// How long snack bars stay on screen: `"short"`, `"long"` or milliseconds.
    #[serde(default = "default_duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<DisplayDuration>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            duration: default_duration(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Snack bar configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Builds the style described by this configuration.
    pub fn style(&self) -> Result<Style> {
        Style::default().apply(&self.style)
    }

    /// Returns the configured display duration.
    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.timing.duration.unwrap_or(DEFAULT_DURATION)
    }
}

fn default_duration() -> Option<DisplayDuration> {
    Some(DEFAULT_DURATION)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// The style section is validated so that a file with unknown colors is
/// rejected as a whole rather than half applied.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.style()?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
