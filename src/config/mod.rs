//! Configuration file support for storysnap.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/storysnap/config.toml`. Settings include pen defaults,
//! the sticker tray, camera lens, share handoff, and the gallery fallback.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{
    CameraConfig, DrawingConfig, GalleryConfig, ShareConfig, StickerConfig, StickerEntry,
};

use crate::draw::Color;
use crate::session::SessionSettings;
use crate::share::ShareSettings;
use crate::share::file::{self, GallerySaveConfig};
use crate::sticker::{StickerCatalog, StickerTemplate};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `share.app_id`.
pub const APP_ID_ENV: &str = "STORYSNAP_APP_ID";

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// palette = ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]
/// stroke_thickness = 5.0
///
/// [stickers]
/// footprint = 80.0
/// catalog = [{ id = 1, image = "stickers/heart.png" }]
///
/// [camera]
/// facing = "front"
///
/// [share]
/// platform = "android"
/// app_id = "com.example.storysnap"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen defaults (color, palette, thickness)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Sticker tray and placement size
    #[serde(default)]
    pub stickers: StickerConfig,

    /// Camera lens and desktop still image
    #[serde(default)]
    pub camera: CameraConfig,

    /// External app handoff
    #[serde(default)]
    pub share: ShareConfig,

    /// Gallery fallback location
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped or replaced by their default and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `stroke_thickness`: 1.0 - 40.0
    /// - `stickers.footprint`: 16.0 - 512.0
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 40.0
        if !(1.0..=40.0).contains(&self.drawing.stroke_thickness) {
            log::warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-40.0 range",
                self.drawing.stroke_thickness
            );
            self.drawing.stroke_thickness = if self.drawing.stroke_thickness.is_nan() {
                5.0
            } else {
                self.drawing.stroke_thickness.clamp(1.0, 40.0)
            };
        }

        // Sticker footprint: 16.0 - 512.0
        if !(16.0..=512.0).contains(&self.stickers.footprint) {
            log::warn!(
                "Invalid sticker footprint {:.1}, clamping to 16.0-512.0 range",
                self.stickers.footprint
            );
            self.stickers.footprint = if self.stickers.footprint.is_nan() {
                80.0
            } else {
                self.stickers.footprint.clamp(16.0, 512.0)
            };
        }

        if !self.drawing.default_color.is_valid() {
            log::warn!(
                "Invalid default_color {:?}, falling back to 'red'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::from("red");
        }

        self.drawing.palette.retain(|spec| {
            let valid = spec.is_valid();
            if !valid {
                log::warn!("Dropping invalid palette entry {:?}", spec);
            }
            valid
        });
        if self.drawing.palette.is_empty() {
            log::warn!("Palette is empty, using the default palette");
            self.drawing.palette = types::default_palette();
        }

        for (name, value) in [
            ("background_top_color", &mut self.share.background_top_color),
            (
                "background_bottom_color",
                &mut self.share.background_bottom_color,
            ),
        ] {
            if Color::from_hex(value).is_none() {
                log::warn!("Invalid {} '{}', falling back to '#FFFFFF'", name, value);
                *value = "#FFFFFF".to_string();
            }
        }

        let filename = self.share.export_filename.trim();
        if filename.is_empty() || filename.contains(['/', '\\']) {
            log::warn!(
                "Invalid export_filename '{}', falling back to '{}'",
                self.share.export_filename,
                file::DEFAULT_EXPORT_FILENAME
            );
            self.share.export_filename = file::DEFAULT_EXPORT_FILENAME.to_string();
        }

        if self.gallery.filename_template.trim().is_empty() {
            log::warn!("Empty gallery filename_template, using the default");
            self.gallery.filename_template = types::default_filename_template();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/storysnap/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("storysnap");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the
    /// file does not exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to `~/.config/storysnap/config.toml`,
    /// creating the parent directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Session tunables derived from the drawing and sticker sections.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            default_color: self.drawing.default_color.to_color(),
            stroke_thickness: self.drawing.stroke_thickness,
            sticker_footprint: self.stickers.footprint,
        }
    }

    /// Colors of the pen color selector.
    pub fn palette(&self) -> Vec<Color> {
        self.drawing.palette.iter().map(ColorSpec::to_color).collect()
    }

    pub fn sticker_catalog(&self) -> StickerCatalog {
        StickerCatalog::new(
            self.stickers
                .catalog
                .iter()
                .map(|entry| StickerTemplate::new(entry.id, entry.image.as_str()))
                .collect(),
        )
    }

    /// Still image for the file-backed camera, with `~/` expanded.
    pub fn still_image(&self) -> Option<PathBuf> {
        self.camera
            .still_image
            .as_deref()
            .map(file::expand_tilde)
    }

    /// Share settings, with the app id taken from `STORYSNAP_APP_ID` when set.
    pub fn share_settings(&self) -> ShareSettings {
        self.share_settings_with(std::env::var(APP_ID_ENV).ok())
    }

    fn share_settings_with(&self, env_app_id: Option<String>) -> ShareSettings {
        let app_id = env_app_id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| self.share.app_id.clone());

        ShareSettings {
            app_name: self.share.app_name.clone(),
            platform: self.share.platform,
            app_id,
            probe_uri: self.share.probe_uri.clone(),
            library_uri: self.share.library_uri.clone(),
            export_path: file::export_path(&self.share.export_filename),
            background_top_color: self.share.background_top_color.clone(),
            background_bottom_color: self.share.background_bottom_color.clone(),
        }
    }

    pub fn gallery_config(&self) -> GallerySaveConfig {
        GallerySaveConfig {
            save_directory: file::expand_tilde(&self.gallery.save_directory),
            filename_template: self.gallery.filename_template.clone(),
        }
    }
}
