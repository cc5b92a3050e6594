// SPDX-License-Identifier: MPL-2.0
//! Demo shell configuration, loaded from and saved to a `settings.toml`
//! file in the platform config directory.
//!
//! Loading is forgiving: a missing file yields the defaults, and an
//! unreadable or malformed file yields the defaults plus a warning the
//! caller can log. Saving creates the parent directory as needed.

mod defaults;

pub use defaults::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_DAMPING, DEFAULT_DRAG_DISMISS_THRESHOLD,
    DEFAULT_STIFFNESS, DEFAULT_SWIPE_TO_DISMISS,
};

use crate::error::Result;
use crate::ui::lightbox::Options;
use crate::ui::state::SpringParams;
use defaults::{APP_NAME, CONFIG_FILE};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted preferences for the demo shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlaySection,
    #[serde(default)]
    pub animation: AnimationSection,
}

/// `[overlay]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OverlaySection {
    /// Backdrop fill, `#rrggbb` or `#rrggbbaa`.
    pub background_color: Option<String>,
    pub swipe_to_dismiss: Option<bool>,
    pub drag_dismiss_threshold: Option<f32>,
}

/// `[animation]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnimationSection {
    pub stiffness: Option<f32>,
    pub damping: Option<f32>,
}

impl Config {
    /// Resolves the configuration into overlay options, falling back to
    /// built-in defaults field by field. A malformed color string falls
    /// back to the default backdrop rather than failing the boot.
    #[must_use]
    pub fn overlay_options(&self) -> Options {
        let background_color = self
            .overlay
            .background_color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(Color::BLACK);

        Options {
            swipe_to_dismiss: self
                .overlay
                .swipe_to_dismiss
                .unwrap_or(DEFAULT_SWIPE_TO_DISMISS),
            background_color,
            drag_dismiss_threshold: self
                .overlay
                .drag_dismiss_threshold
                .unwrap_or(DEFAULT_DRAG_DISMISS_THRESHOLD),
            spring: SpringParams {
                stiffness: self.animation.stiffness.unwrap_or(DEFAULT_STIFFNESS),
                damping: self.animation.damping.unwrap_or(DEFAULT_DAMPING),
                mass: 1.0,
            },
        }
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` into a color.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| f32::from(v) / 255.0)
            .ok()
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
    Some(Color { r, g, b, a })
}

/// Resolved location of the settings file, if the platform has one.
#[must_use]
pub fn default_config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    match dir_override {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(CONFIG_FILE);
            path
        }),
    }
}

/// Loads the configuration, degrading to defaults. The second tuple field
/// carries a warning when an existing file could not be used.
#[must_use]
pub fn load(dir_override: Option<&Path>) -> (Config, Option<&'static str>) {
    let Some(path) = default_config_path(dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some("failed to read settings.toml")),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = default_config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            overlay: OverlaySection {
                background_color: Some("#101010".to_string()),
                swipe_to_dismiss: Some(false),
                drag_dismiss_threshold: Some(200.0),
            },
            animation: AnimationSection {
                stiffness: Some(240.0),
                damping: Some(30.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_degrades_to_defaults_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(&config_path, "this is not { toml").expect("write");

        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_without_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        let options = config.overlay_options();

        assert_eq!(options.swipe_to_dismiss, DEFAULT_SWIPE_TO_DISMISS);
        assert_eq!(
            options.drag_dismiss_threshold,
            DEFAULT_DRAG_DISMISS_THRESHOLD
        );
        assert_eq!(options.spring.stiffness, DEFAULT_STIFFNESS);
        assert_eq!(options.spring.damping, DEFAULT_DAMPING);
    }

    #[test]
    fn parse_hex_color_accepts_rgb() {
        let color = parse_hex_color("#ff8000").expect("valid color");
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-6);
        assert!((color.b - 0.0).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parse_hex_color_accepts_rgba() {
        let color = parse_hex_color("#00000080").expect("valid color");
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_hex_color_rejects_junk() {
        assert!(parse_hex_color("red").is_none());
        assert!(parse_hex_color("#12345").is_none());
        assert!(parse_hex_color("#zzzzzz").is_none());
        assert!(parse_hex_color("").is_none());
    }

    #[test]
    fn malformed_color_falls_back_to_black() {
        let config = Config {
            overlay: OverlaySection {
                background_color: Some("nonsense".to_string()),
                ..OverlaySection::default()
            },
            ..Config::default()
        };
        assert_eq!(config.overlay_options().background_color, Color::BLACK);
    }
}
