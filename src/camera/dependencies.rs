use std::path::PathBuf;

use async_trait::async_trait;

use crate::camera::types::{CameraFacing, PermissionStatus};
use crate::error::{Error, Result};
use crate::image::ImageRef;

/// Abstraction over the native camera. Hosts implement it over their camera
/// API; tests mock it.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Asks the user for camera access. Called once at startup.
    async fn request_permission(&self) -> PermissionStatus;

    /// Starts the live preview on the given lens.
    async fn start_preview(&self, facing: CameraFacing) -> Result<()>;

    /// Takes a still photo. `Ok(None)` means the device produced no image.
    async fn capture(&self) -> Result<Option<ImageRef>>;
}

/// File-backed camera for desktop and headless runs: every capture returns
/// the same still image.
#[derive(Debug, Clone)]
pub struct StillImageCamera {
    image: Option<PathBuf>,
}

impl StillImageCamera {
    pub fn new(image: Option<PathBuf>) -> Self {
        Self { image }
    }

    async fn existing_image(&self) -> Option<PathBuf> {
        let path = self.image.as_ref()?;
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Some(path.clone()),
            Ok(_) => {
                log::warn!("Still image {} is not a file", path.display());
                None
            }
            Err(err) => {
                log::warn!("Still image {} unavailable: {}", path.display(), err);
                None
            }
        }
    }
}

#[async_trait]
impl CameraDevice for StillImageCamera {
    async fn request_permission(&self) -> PermissionStatus {
        // No still image configured stands in for a denied camera.
        if self.existing_image().await.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn start_preview(&self, facing: CameraFacing) -> Result<()> {
        log::debug!("Still image preview started ({:?} facing)", facing);
        Ok(())
    }

    async fn capture(&self) -> Result<Option<ImageRef>> {
        let path = self.existing_image().await.ok_or_else(|| {
            Error::CameraUnavailable("no still image configured".to_string())
        })?;
        let absolute = tokio::fs::canonicalize(&path).await?;
        Ok(Some(ImageRef::from_path(&absolute)))
    }
}
