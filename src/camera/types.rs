//! Data types for the camera capability.

use crate::image::ImageRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Which lens the preview uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CameraFacing {
    /// Selfie camera
    #[default]
    Front,
    Back,
}

/// Visible state of the camera preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// Waiting for the permission answer ("Requesting permissions...")
    Requesting,
    /// Permission denied. Stays blocked until the app is relaunched.
    Blocked,
    /// Preview running
    Live,
}

/// Result of pressing the shutter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A photo was taken
    Captured(ImageRef),
    /// The device returned no image; nothing changes
    Empty,
    /// The camera has not signalled readiness; the device was not called
    NotReady,
    /// Another capture is already in flight; the device was not called
    Busy,
}
