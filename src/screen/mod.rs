//! Screen controller tying the camera, the edit session and the share
//! pipeline together.
//!
//! Every failure is recovered at the action that triggered it and shown to
//! the user as a [`Notice`]; nothing here is fatal.

use std::sync::Arc;

use tokio::task;

use crate::camera::{CameraController, CaptureOutcome, PermissionStatus, PreviewState};
use crate::error::{Error, Result};
use crate::notification::{Notice, Notifier};
use crate::session::EditSession;
use crate::share::{ShareDependencies, ShareOutcome, ShareRequest, ShareSettings, perform_share};


/// The camera/edit screen.
pub struct Screen {
    camera: CameraController,
    session: EditSession,
    share: ShareSettings,
    dependencies: Arc<ShareDependencies>,
    notifier: Arc<dyn Notifier>,
    gallery: Option<PermissionStatus>,
}

impl Screen {
    pub fn new(
        camera: CameraController,
        session: EditSession,
        share: ShareSettings,
        dependencies: Arc<ShareDependencies>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            camera,
            session,
            share,
            dependencies,
            notifier,
            gallery: None,
        }
    }

    /// Requests camera and gallery permissions.
    ///
    /// A denied gallery only produces a notice; sharing still works, saving
    /// will be refused later.
    pub async fn start(&mut self) -> Result<PreviewState> {
        let preview = match self.camera.start().await {
            Ok(preview) => preview,
            Err(err) => {
                log::error!("Camera preview failed to start: {}", err);
                self.notifier
                    .notify(&Notice::error("Error", "Failed to start camera"));
                return Err(err);
            }
        };

        let files = Arc::clone(&self.dependencies.files);
        let gallery = task::spawn_blocking(move || files.request_permission())
            .await
            .unwrap_or_else(|e| {
                log::warn!("Gallery permission task failed: {}", e);
                PermissionStatus::Denied
            });
        log::info!("Gallery permission: {:?}", gallery);
        if !gallery.is_granted() {
            self.notifier.notify(&Notice::error(
                "Permission required",
                "Media library access is needed to save photos",
            ));
        }
        self.gallery = Some(gallery);

        Ok(preview)
    }

    /// Host signal that the camera finished initializing.
    pub fn on_camera_ready(&self) {
        self.camera.mark_ready();
    }

    pub fn preview(&self) -> PreviewState {
        self.camera.preview()
    }

    /// Result of the gallery permission request, once [`Screen::start`] ran.
    pub fn gallery_permission(&self) -> Option<PermissionStatus> {
        self.gallery
    }

    /// Shutter press. A captured photo opens a fresh edit session.
    pub async fn take_picture(&mut self) -> Result<CaptureOutcome> {
        match self.camera.take_picture().await {
            Ok(CaptureOutcome::Captured(image)) => {
                self.session.begin(image.clone());
                Ok(CaptureOutcome::Captured(image))
            }
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                log::error!("Capture failed: {}", err);
                self.notifier
                    .notify(&Notice::error("Error", "Failed to capture image"));
                Err(err)
            }
        }
    }

    /// Drops the photo and annotations and returns to the camera.
    pub fn discard(&mut self) {
        self.session.discard();
    }

    /// Shares the current composition.
    ///
    /// A successful handoff to the external app ends the session. A gallery
    /// save keeps it so the user can keep editing; a failure leaves it intact
    /// for a retry.
    pub async fn share(&mut self) -> Result<ShareOutcome> {
        let request = ShareRequest {
            composition: self.session.compose(),
            caption: self.session.caption().to_string(),
            settings: self.share.clone(),
        };

        match perform_share(request, Arc::clone(&self.dependencies)).await {
            Ok(outcome) => {
                match &outcome {
                    ShareOutcome::Shared { .. } => self.session.discard(),
                    ShareOutcome::SavedToGallery(_) => self
                        .notifier
                        .notify(&Notice::info("Success", "Image saved to gallery")),
                    ShareOutcome::Cancelled => {}
                }
                Ok(outcome)
            }
            Err(err) => {
                log::error!("Share to {} failed: {}", self.share.app_name, err);
                let notice = match &err {
                    Error::PermissionDenied(_) => Notice::error(
                        "Permission required",
                        "Media library access is needed to save photos",
                    ),
                    _ => Notice::error(
                        "Error",
                        format!("Failed to share to {}", self.share.app_name),
                    ),
                };
                self.notifier.notify(&notice);
                Err(err)
            }
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn share_settings(&self) -> &ShareSettings {
        &self.share
    }
}
