use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use super::{
    dependencies::{BasePhotoExporter, FileStore, Prompter, ShareDependencies, ShareTarget},
    pipeline::perform_share,
    types::{FallbackChoice, SharePlatform, ShareOutcome, ShareRequest, ShareSettings},
};
use crate::camera::PermissionStatus;
use crate::error::{Error, Result};
use crate::image::ImageRef;
use crate::session::{Composition, Layer, PhotoFit};

#[derive(Clone, Default)]
struct MockFiles {
    fail_copy: bool,
    deny_permission: bool,
    copies: Arc<Mutex<Vec<(ImageRef, PathBuf)>>>,
    saves: Arc<Mutex<Vec<PathBuf>>>,
}

impl FileStore for MockFiles {
    fn request_permission(&self) -> PermissionStatus {
        if self.deny_permission {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        }
    }

    fn copy(&self, src: &ImageRef, dst: &Path) -> Result<()> {
        self.copies
            .lock()
            .unwrap()
            .push((src.clone(), dst.to_path_buf()));
        if self.fail_copy {
            Err(Error::IoFailure(std::io::Error::other("disk full")))
        } else {
            Ok(())
        }
    }

    fn save_to_library(&self, path: &Path) -> Result<PathBuf> {
        self.saves.lock().unwrap().push(path.to_path_buf());
        Ok(PathBuf::from("/gallery/saved.jpg"))
    }
}

#[derive(Clone, Default)]
struct MockTarget {
    installed: bool,
    fail_open: bool,
    probes: Arc<Mutex<Vec<String>>>,
    opened: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ShareTarget for MockTarget {
    async fn can_open(&self, uri: &str) -> bool {
        self.probes.lock().unwrap().push(uri.to_string());
        self.installed
    }

    async fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail_open {
            Err(Error::IoFailure(std::io::Error::other("activity not found")))
        } else {
            Ok(())
        }
    }
}

#[derive(Clone)]
struct MockPrompter {
    answer: FallbackChoice,
    asked: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Prompter for MockPrompter {
    async fn ask_save_fallback(&self, app_name: &str) -> FallbackChoice {
        self.asked.lock().unwrap().push(app_name.to_string());
        self.answer
    }
}

fn settings() -> ShareSettings {
    ShareSettings {
        app_name: "Instagram".to_string(),
        platform: SharePlatform::Android,
        app_id: Some("com.example.storysnap".to_string()),
        probe_uri: "instagram-stories://share".to_string(),
        library_uri: "instagram://library".to_string(),
        export_path: PathBuf::from("/cache/image-to-share.jpg"),
        background_top_color: "#FFFFFF".to_string(),
        background_bottom_color: "#FFFFFF".to_string(),
    }
}

fn request(caption: &str) -> ShareRequest {
    ShareRequest {
        composition: Composition {
            layers: vec![Layer::Photo {
                image: ImageRef::new("file:///photos/capture.jpg"),
                fit: PhotoFit::Contain,
            }],
        },
        caption: caption.to_string(),
        settings: settings(),
    }
}

fn deps(files: &MockFiles, target: &MockTarget, prompter: &MockPrompter) -> Arc<ShareDependencies> {
    Arc::new(ShareDependencies {
        exporter: Arc::new(BasePhotoExporter),
        files: Arc::new(files.clone()),
        target: Arc::new(target.clone()),
        prompter: Arc::new(prompter.clone()),
    })
}

fn prompter(answer: FallbackChoice) -> MockPrompter {
    MockPrompter {
        answer,
        asked: Arc::new(Mutex::new(Vec::new())),
    }
}

#[tokio::test]
async fn installed_app_receives_deep_link() {
    let files = MockFiles::default();
    let target = MockTarget {
        installed: true,
        ..MockTarget::default()
    };
    let prompter = prompter(FallbackChoice::Cancel);

    let outcome = perform_share(request("sunny day"), deps(&files, &target, &prompter))
        .await
        .unwrap();

    let copies = files.copies.lock().unwrap();
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].0.as_str(), "file:///photos/capture.jpg");
    assert_eq!(copies[0].1, PathBuf::from("/cache/image-to-share.jpg"));

    assert_eq!(
        *target.probes.lock().unwrap(),
        vec!["instagram-stories://share".to_string()]
    );
    let opened = target.opened.lock().unwrap();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains("background_image=%2Fcache%2Fimage-to-share.jpg"));
    assert!(opened[0].ends_with("&caption=sunny%20day"));
    assert_eq!(
        outcome,
        ShareOutcome::Shared {
            url: opened[0].clone()
        }
    );
    assert!(prompter.asked.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_app_and_confirm_saves_to_gallery() {
    let files = MockFiles::default();
    let target = MockTarget::default();
    let prompter = prompter(FallbackChoice::SaveImage);

    let outcome = perform_share(request(""), deps(&files, &target, &prompter))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ShareOutcome::SavedToGallery(PathBuf::from("/gallery/saved.jpg"))
    );
    assert_eq!(*prompter.asked.lock().unwrap(), vec!["Instagram".to_string()]);
    assert_eq!(
        *files.saves.lock().unwrap(),
        vec![PathBuf::from("/cache/image-to-share.jpg")]
    );
    assert!(target.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_app_and_cancel_saves_nothing() {
    let files = MockFiles::default();
    let target = MockTarget::default();
    let prompter = prompter(FallbackChoice::Cancel);

    let outcome = perform_share(request("x"), deps(&files, &target, &prompter))
        .await
        .unwrap();

    assert_eq!(outcome, ShareOutcome::Cancelled);
    assert!(files.saves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_composition_is_export_failure() {
    let files = MockFiles::default();
    let target = MockTarget::default();
    let prompter = prompter(FallbackChoice::SaveImage);
    let mut request = request("x");
    request.composition = Composition::default();

    let err = perform_share(request, deps(&files, &target, &prompter))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ExportFailure(_)));
    assert!(files.copies.lock().unwrap().is_empty());
    assert!(target.probes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn copy_failure_stops_before_probe() {
    let files = MockFiles {
        fail_copy: true,
        ..MockFiles::default()
    };
    let target = MockTarget {
        installed: true,
        ..MockTarget::default()
    };
    let prompter = prompter(FallbackChoice::Cancel);

    let err = perform_share(request("x"), deps(&files, &target, &prompter))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::IoFailure(_)));
    assert!(target.probes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn open_failure_is_share_failure() {
    let files = MockFiles::default();
    let target = MockTarget {
        installed: true,
        fail_open: true,
        ..MockTarget::default()
    };
    let prompter = prompter(FallbackChoice::Cancel);

    let err = perform_share(request("x"), deps(&files, &target, &prompter))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ShareFailure(_)));
}

#[tokio::test]
async fn gallery_permission_denied_blocks_save() {
    let files = MockFiles {
        deny_permission: true,
        ..MockFiles::default()
    };
    let target = MockTarget::default();
    let prompter = prompter(FallbackChoice::SaveImage);

    let err = perform_share(request("x"), deps(&files, &target, &prompter))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::PermissionDenied(_)));
    assert!(files.saves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn ios_platform_uses_library_link() {
    let files = MockFiles::default();
    let target = MockTarget {
        installed: true,
        ..MockTarget::default()
    };
    let prompter = prompter(FallbackChoice::Cancel);
    let mut request = request("hey");
    request.settings.platform = SharePlatform::Ios;

    let outcome = perform_share(request, deps(&files, &target, &prompter))
        .await
        .unwrap();

    match outcome {
        ShareOutcome::Shared { url } => {
            assert!(url.starts_with("instagram://library?AssetPath=file%3A%2F%2F"));
            assert!(url.ends_with("&InstagramCaption=hey"));
        }
        other => panic!("expected share, got {other:?}"),
    }
}
