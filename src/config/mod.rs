// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use zoom_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Make the dismiss gesture less sensitive
//! config.viewer.dismiss_threshold = 260.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.viewer.dismiss_threshold, 260.0);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::ui::{AnimationSpeed, Distance, Fraction, Opacity, ZoomScale};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ZoomLens";

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Option<String>,
    pub viewer: ViewerSection,
    pub watermark: WatermarkSection,
}

/// Raw `[viewer]` table. Values are validated by [`ViewerSection::settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSection {
    pub animation_speed_ms: u64,
    pub snap_back_ms: u64,
    pub teardown_delay_ms: u64,
    pub dismiss_threshold: f32,
    pub opacity_floor: f32,
    pub dismiss_distance: f32,
    pub maximum_zoom_scale: f32,
}

impl Default for ViewerSection {
    fn default() -> Self {
        Self {
            animation_speed_ms: DEFAULT_ANIMATION_SPEED_MS,
            snap_back_ms: DEFAULT_SNAP_BACK_MS,
            teardown_delay_ms: DEFAULT_TEARDOWN_DELAY_MS,
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            opacity_floor: DEFAULT_OPACITY_FLOOR,
            dismiss_distance: DEFAULT_DISMISS_DISTANCE,
            maximum_zoom_scale: DEFAULT_MAXIMUM_ZOOM_SCALE,
        }
    }
}

impl ViewerSection {
    /// Validated runtime settings.
    #[must_use]
    pub fn settings(&self) -> ViewerSettings {
        ViewerSettings {
            animation_speed: AnimationSpeed::from_millis(self.animation_speed_ms),
            snap_back: AnimationSpeed::from_millis(self.snap_back_ms),
            teardown_delay: AnimationSpeed::from_millis(self.teardown_delay_ms),
            dismiss_threshold: Distance::new(self.dismiss_threshold, DEFAULT_DISMISS_THRESHOLD),
            opacity_floor: Opacity::new(self.opacity_floor),
            dismiss_distance: Distance::new(self.dismiss_distance, DEFAULT_DISMISS_DISTANCE),
            maximum_zoom_scale: ZoomScale::new(self.maximum_zoom_scale),
        }
    }
}

/// Raw `[watermark]` table. Values are validated by [`WatermarkSection::settings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkSection {
    pub scale: f32,
    pub margin: f32,
    pub alpha: f32,
}

impl Default for WatermarkSection {
    fn default() -> Self {
        Self {
            scale: DEFAULT_WATERMARK_SCALE,
            margin: DEFAULT_WATERMARK_MARGIN,
            alpha: DEFAULT_WATERMARK_ALPHA,
        }
    }
}

impl WatermarkSection {
    /// Validated runtime settings.
    #[must_use]
    pub fn settings(&self) -> WatermarkSettings {
        WatermarkSettings {
            scale: Fraction::new(self.scale),
            margin: Fraction::new(self.margin),
            alpha: Opacity::new(self.alpha),
        }
    }
}

/// Validated interaction tuning used by the viewer at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Appear fade and fly-off duration.
    pub animation_speed: AnimationSpeed,
    /// Snap-back duration after a cancelled dismiss.
    pub snap_back: AnimationSpeed,
    /// Delay between the end of the fly-off and clearing the image.
    pub teardown_delay: AnimationSpeed,
    pub dismiss_threshold: Distance,
    pub opacity_floor: Opacity,
    pub dismiss_distance: Distance,
    pub maximum_zoom_scale: ZoomScale,
}

impl ViewerSettings {
    /// Time from a committed dismiss to the image being cleared.
    #[must_use]
    pub fn teardown_after(&self) -> Duration {
        self.animation_speed.as_duration() + self.teardown_delay.as_duration()
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        ViewerSection::default().settings()
    }
}

/// Validated watermark placement used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkSettings {
    pub scale: Fraction,
    pub margin: Fraction,
    pub alpha: Opacity,
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        WatermarkSection::default().settings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
