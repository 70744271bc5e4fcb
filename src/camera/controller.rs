use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::camera::{
    dependencies::CameraDevice,
    types::{CameraFacing, CaptureOutcome, PreviewState},
};
use crate::error::{Error, Result};

/// Owns the camera device and gates the shutter.
///
/// Two flags guard capture: `ready` is set by the host's camera-ready signal,
/// and `busy` is held for the duration of a device call so a double tap can
/// never issue two captures.
pub struct CameraController {
    device: Arc<dyn CameraDevice>,
    facing: CameraFacing,
    preview: PreviewState,
    ready: AtomicBool,
    busy: AtomicBool,
}

impl CameraController {
    pub fn new(device: Arc<dyn CameraDevice>, facing: CameraFacing) -> Self {
        Self {
            device,
            facing,
            preview: PreviewState::Requesting,
            ready: AtomicBool::new(false),
            busy: AtomicBool::new(false),
        }
    }

    /// Requests camera permission and starts the preview when granted.
    ///
    /// A denial leaves the preview permanently [`PreviewState::Blocked`];
    /// there is no re-check. Returns the resulting preview state.
    pub async fn start(&mut self) -> Result<PreviewState> {
        if self.preview != PreviewState::Requesting {
            log::debug!("Camera already started ({:?})", self.preview);
            return Ok(self.preview);
        }

        let status = self.device.request_permission().await;
        log::info!("Camera permission: {:?}", status);

        if !status.is_granted() {
            self.preview = PreviewState::Blocked;
            return Ok(self.preview);
        }

        self.device.start_preview(self.facing).await?;
        self.preview = PreviewState::Live;
        Ok(self.preview)
    }

    pub fn preview(&self) -> PreviewState {
        self.preview
    }

    /// Host callback for "camera ready". Ignored unless the preview is live.
    pub fn mark_ready(&self) {
        if self.preview == PreviewState::Live {
            self.ready.store(true, Ordering::SeqCst);
            log::debug!("Camera ready");
        } else {
            log::warn!("Camera ready signal ignored in {:?} state", self.preview);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Takes a photo if the camera is ready and idle.
    ///
    /// Not-ready and busy attempts return without touching the device. Device
    /// failures surface as [`Error::CameraUnavailable`].
    pub async fn take_picture(&self) -> Result<CaptureOutcome> {
        if !self.is_ready() {
            log::debug!("Capture requested before camera ready");
            return Ok(CaptureOutcome::NotReady);
        }

        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            log::debug!("Capture already in flight");
            return Ok(CaptureOutcome::Busy);
        };

        log::info!("Capturing photo");
        match self.device.capture().await {
            Ok(Some(image)) if !image.is_empty() => {
                log::info!("Captured {}", image);
                Ok(CaptureOutcome::Captured(image))
            }
            Ok(_) => {
                log::warn!("Camera returned no image");
                Ok(CaptureOutcome::Empty)
            }
            Err(err @ Error::CameraUnavailable(_)) => Err(err),
            Err(err) => Err(Error::CameraUnavailable(err.to_string())),
        }
    }
}

/// Holds the busy flag; releases it on drop, including on early return.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
