//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::camera::CameraFacing;
use crate::share::SharePlatform;
use crate::share::file::DEFAULT_EXPORT_FILENAME;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pen settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Pen color when the editor opens - a named color, `#RRGGBB`, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Colors offered by the color selector, in display order
    #[serde(default = "default_palette")]
    pub palette: Vec<ColorSpec>,

    /// Thickness of drawn segments in pixels (valid range: 1.0 - 40.0)
    #[serde(default = "default_stroke_thickness")]
    pub stroke_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            palette: default_palette(),
            stroke_thickness: default_stroke_thickness(),
        }
    }
}

/// One entry of the sticker tray.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StickerEntry {
    /// Identifier, unique within the catalog
    pub id: u32,
    /// Image URI or path
    pub image: String,
}

/// Sticker settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StickerConfig {
    /// Width and height of a placed sticker in pixels (valid range: 16.0 - 512.0)
    #[serde(default = "default_footprint")]
    pub footprint: f64,

    /// Stickers offered in the tray
    #[serde(default = "default_catalog")]
    pub catalog: Vec<StickerEntry>,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            footprint: default_footprint(),
            catalog: default_catalog(),
        }
    }
}

/// Camera settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CameraConfig {
    /// Lens used for the preview
    #[serde(default)]
    pub facing: CameraFacing,

    /// Still image served by the file-backed camera on desktop
    #[serde(default)]
    pub still_image: Option<String>,
}

/// External app handoff settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShareConfig {
    /// Display name of the external app
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Deep link flavour: `ios` (library link) or `android` (story link)
    #[serde(default)]
    pub platform: SharePlatform,

    /// Source application id embedded in story links. The
    /// `STORYSNAP_APP_ID` environment variable takes precedence.
    #[serde(default)]
    pub app_id: Option<String>,

    /// URI probed to detect the app; base of story links
    #[serde(default = "default_probe_uri")]
    pub probe_uri: String,

    /// Base of library links
    #[serde(default = "default_library_uri")]
    pub library_uri: String,

    /// File name of the exported image inside the cache directory
    #[serde(default = "default_export_filename")]
    pub export_filename: String,

    /// Story background color above the image
    #[serde(default = "default_background")]
    pub background_top_color: String,

    /// Story background color below the image
    #[serde(default = "default_background")]
    pub background_bottom_color: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            platform: SharePlatform::default(),
            app_id: None,
            probe_uri: default_probe_uri(),
            library_uri: default_library_uri(),
            export_filename: default_export_filename(),
            background_top_color: default_background(),
            background_bottom_color: default_background(),
        }
    }
}

/// Gallery fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GalleryConfig {
    /// Directory standing in for the photo library (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Saved file name template (chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

pub(super) fn default_palette() -> Vec<ColorSpec> {
    ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]
        .into_iter()
        .map(ColorSpec::from)
        .collect()
}

fn default_stroke_thickness() -> f64 {
    5.0
}

fn default_footprint() -> f64 {
    80.0
}

fn default_catalog() -> Vec<StickerEntry> {
    ["heart", "star", "smile", "fire"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| StickerEntry {
            id,
            image: format!("stickers/{}.png", name),
        })
        .collect()
}

fn default_app_name() -> String {
    "Instagram".to_string()
}

fn default_probe_uri() -> String {
    "instagram-stories://share".to_string()
}

fn default_library_uri() -> String {
    "instagram://library".to_string()
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

fn default_save_directory() -> String {
    "~/Pictures/StorySnap".to_string()
}

pub(super) fn default_filename_template() -> String {
    "storysnap_%Y-%m-%d_%H%M%S".to_string()
}
