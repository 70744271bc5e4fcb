use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;

use crate::camera::PermissionStatus;
use crate::error::{Error, Result};
use crate::image::ImageRef;
use crate::session::Composition;
use crate::share::{
    file::{self, GallerySaveConfig},
    types::FallbackChoice,
    xdg,
};

/// Produces the composed image for a layer stack.
pub trait Exporter: Send + Sync {
    fn export(&self, composition: &Composition) -> Result<ImageRef>;
}

/// Abstraction over file copying and the device photo library.
pub trait FileStore: Send + Sync {
    fn request_permission(&self) -> PermissionStatus;
    fn copy(&self, src: &ImageRef, dst: &Path) -> Result<()>;
    fn save_to_library(&self, path: &Path) -> Result<PathBuf>;
}

/// Abstraction over inter-app URL handoff.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether some installed app handles `uri`.
    async fn can_open(&self, uri: &str) -> bool;
    async fn open(&self, url: &str) -> Result<()>;
}

/// Asks the user what to do when the external app is missing.
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn ask_save_fallback(&self, app_name: &str) -> FallbackChoice;
}

/// Bundle of dependencies used by the share pipeline. Each component can be
/// mocked in tests.
#[derive(Clone)]
pub struct ShareDependencies {
    pub exporter: Arc<dyn Exporter>,
    pub files: Arc<dyn FileStore>,
    pub target: Arc<dyn ShareTarget>,
    pub prompter: Arc<dyn Prompter>,
}

impl Default for ShareDependencies {
    fn default() -> Self {
        Self {
            exporter: Arc::new(BasePhotoExporter),
            files: Arc::new(LocalFileStore::default()),
            target: Arc::new(XdgShareTarget),
            prompter: Arc::new(FixedPrompter(FallbackChoice::Cancel)),
        }
    }
}

/// Exports the base photo of the composition as the shareable image.
///
/// Annotation layers are not flattened into pixels; the host renders them.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasePhotoExporter;

impl Exporter for BasePhotoExporter {
    fn export(&self, composition: &Composition) -> Result<ImageRef> {
        composition
            .base_photo()
            .cloned()
            .ok_or_else(|| Error::ExportFailure("no captured photo to export".to_string()))
    }
}

/// File store on the local filesystem; the gallery is a directory.
#[derive(Debug, Default, Clone)]
pub struct LocalFileStore {
    pub gallery: GallerySaveConfig,
}

impl LocalFileStore {
    pub fn new(gallery: GallerySaveConfig) -> Self {
        Self { gallery }
    }
}

impl FileStore for LocalFileStore {
    fn request_permission(&self) -> PermissionStatus {
        match file::ensure_directory_exists(&self.gallery.save_directory) {
            Ok(_) => PermissionStatus::Granted,
            Err(err) => {
                log::warn!(
                    "Gallery directory {} unusable: {}",
                    self.gallery.save_directory.display(),
                    err
                );
                PermissionStatus::Denied
            }
        }
    }

    fn copy(&self, src: &ImageRef, dst: &Path) -> Result<()> {
        file::copy_image(src, dst)
    }

    fn save_to_library(&self, path: &Path) -> Result<PathBuf> {
        file::save_to_gallery(path, &self.gallery)
    }
}

/// Share target backed by `xdg-mime` and `xdg-open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XdgShareTarget;

#[async_trait]
impl ShareTarget for XdgShareTarget {
    async fn can_open(&self, uri: &str) -> bool {
        xdg::can_open(uri).await
    }

    async fn open(&self, url: &str) -> Result<()> {
        xdg::open(url).await
    }
}

/// Prompter that always gives the same answer (headless runs, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompter(pub FallbackChoice);

#[async_trait]
impl Prompter for FixedPrompter {
    async fn ask_save_fallback(&self, app_name: &str) -> FallbackChoice {
        log::info!(
            "{} is not installed; answering save prompt with {:?}",
            app_name,
            self.0
        );
        self.0
    }
}
