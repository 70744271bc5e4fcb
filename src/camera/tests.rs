use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use super::{
    controller::CameraController,
    dependencies::{CameraDevice, StillImageCamera},
    types::{CameraFacing, CaptureOutcome, PermissionStatus, PreviewState},
};
use crate::error::{Error, Result};
use crate::image::ImageRef;

#[derive(Clone)]
struct MockCamera {
    permission: PermissionStatus,
    image: Option<&'static str>,
    fail: bool,
    delay: Duration,
    captures: Arc<Mutex<usize>>,
    previews: Arc<Mutex<Vec<CameraFacing>>>,
}

impl MockCamera {
    fn granted() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            image: Some("file:///tmp/selfie.jpg"),
            fail: false,
            delay: Duration::ZERO,
            captures: Arc::new(Mutex::new(0)),
            previews: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CameraDevice for MockCamera {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn start_preview(&self, facing: CameraFacing) -> Result<()> {
        self.previews.lock().unwrap().push(facing);
        Ok(())
    }

    async fn capture(&self) -> Result<Option<ImageRef>> {
        *self.captures.lock().unwrap() += 1;
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        if self.fail {
            return Err(Error::IoFailure(std::io::Error::other("sensor error")));
        }
        Ok(self.image.map(ImageRef::new))
    }
}

async fn ready_controller(camera: MockCamera) -> CameraController {
    let mut controller = CameraController::new(Arc::new(camera), CameraFacing::Front);
    assert_eq!(controller.start().await.unwrap(), PreviewState::Live);
    controller.mark_ready();
    controller
}

#[tokio::test]
async fn start_opens_front_preview_when_granted() {
    let camera = MockCamera::granted();
    let previews = camera.previews.clone();
    let mut controller = CameraController::new(Arc::new(camera), CameraFacing::Front);

    assert_eq!(controller.preview(), PreviewState::Requesting);
    assert_eq!(controller.start().await.unwrap(), PreviewState::Live);
    assert_eq!(*previews.lock().unwrap(), vec![CameraFacing::Front]);
}

#[tokio::test]
async fn denied_permission_blocks_preview_permanently() {
    let camera = MockCamera {
        permission: PermissionStatus::Denied,
        ..MockCamera::granted()
    };
    let previews = camera.previews.clone();
    let mut controller = CameraController::new(Arc::new(camera), CameraFacing::Front);

    assert_eq!(controller.start().await.unwrap(), PreviewState::Blocked);
    assert_eq!(controller.start().await.unwrap(), PreviewState::Blocked);
    controller.mark_ready();

    assert!(!controller.is_ready());
    assert!(previews.lock().unwrap().is_empty());
}

#[tokio::test]
async fn capture_before_ready_never_calls_device() {
    let camera = MockCamera::granted();
    let captures = camera.captures.clone();
    let mut controller = CameraController::new(Arc::new(camera), CameraFacing::Front);
    controller.start().await.unwrap();

    let outcome = controller.take_picture().await.unwrap();

    assert_eq!(outcome, CaptureOutcome::NotReady);
    assert_eq!(*captures.lock().unwrap(), 0);
}

#[tokio::test]
async fn capture_returns_photo_when_ready() {
    let controller = ready_controller(MockCamera::granted()).await;

    let outcome = controller.take_picture().await.unwrap();

    assert_eq!(
        outcome,
        CaptureOutcome::Captured(ImageRef::new("file:///tmp/selfie.jpg"))
    );
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn empty_capture_is_reported() {
    let controller = ready_controller(MockCamera {
        image: None,
        ..MockCamera::granted()
    })
    .await;

    assert_eq!(controller.take_picture().await.unwrap(), CaptureOutcome::Empty);
}

#[tokio::test]
async fn device_failure_maps_to_camera_unavailable() {
    let controller = ready_controller(MockCamera {
        fail: true,
        ..MockCamera::granted()
    })
    .await;

    let err = controller.take_picture().await.unwrap_err();
    assert!(matches!(err, Error::CameraUnavailable(_)));
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn double_tap_issues_a_single_capture() {
    let camera = MockCamera {
        delay: Duration::from_millis(20),
        ..MockCamera::granted()
    };
    let captures = camera.captures.clone();
    let controller = ready_controller(camera).await;

    let (first, second) = tokio::join!(controller.take_picture(), controller.take_picture());

    let outcomes = [first.unwrap(), second.unwrap()];
    assert!(outcomes.contains(&CaptureOutcome::Busy));
    assert!(outcomes.iter().any(|o| matches!(o, CaptureOutcome::Captured(_))));
    assert_eq!(*captures.lock().unwrap(), 1);

    // The flag is released once the first capture finishes.
    assert!(matches!(
        controller.take_picture().await.unwrap(),
        CaptureOutcome::Captured(_)
    ));
}

#[tokio::test]
async fn still_image_camera_serves_file_uri() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("still.jpg");
    std::fs::write(&path, b"jpeg").unwrap();

    let camera = StillImageCamera::new(Some(path.clone()));
    assert_eq!(camera.request_permission().await, PermissionStatus::Granted);

    let image = camera.capture().await.unwrap().unwrap();
    assert!(image.as_str().starts_with("file://"));
    assert_eq!(image.to_path().unwrap(), path.canonicalize().unwrap());
}

#[tokio::test]
async fn still_image_camera_without_file_is_denied() {
    let camera = StillImageCamera::new(None);
    assert_eq!(camera.request_permission().await, PermissionStatus::Denied);
    assert!(matches!(
        camera.capture().await,
        Err(Error::CameraUnavailable(_))
    ));
}
