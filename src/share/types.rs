//! Data types for the export/share pipeline.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::session::Composition;

/// Deep link flavour used to reach the external app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SharePlatform {
    /// Library handoff: asset path plus caption
    Ios,
    /// Story composer handoff: source app id, background image and colors,
    /// optional caption
    #[default]
    Android,
}

/// Where and how to hand the composed image off.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSettings {
    /// Display name of the external app, used in notices
    pub app_name: String,
    pub platform: SharePlatform,
    /// Source application identifier embedded in story links
    pub app_id: Option<String>,
    /// URI probed to decide whether the app is installed; also the base of
    /// story links
    pub probe_uri: String,
    /// Base of library links
    pub library_uri: String,
    /// Fixed location the composed image is copied to before handoff
    pub export_path: PathBuf,
    pub background_top_color: String,
    pub background_bottom_color: String,
}

/// One share attempt.
#[derive(Debug, Clone)]
pub struct ShareRequest {
    pub composition: Composition,
    pub caption: String,
    pub settings: ShareSettings,
}

/// User's answer when the external app is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackChoice {
    Cancel,
    SaveImage,
}

/// How a share attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The external app was opened with this deep link
    Shared { url: String },
    /// The app was missing and the image went to the gallery
    SavedToGallery(PathBuf),
    /// The app was missing and the user declined the gallery fallback
    Cancelled,
}
