use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::error::{Error, Result};
use crate::image::ImageRef;
use crate::share::{
    deeplink::build_share_url,
    dependencies::{FileStore, ShareDependencies},
    types::{FallbackChoice, ShareOutcome, ShareRequest},
};

/// Runs one share attempt. Linear, no retries.
///
/// 1. Export the composed image (`ExportFailure` when there is none)
/// 2. Copy it to the fixed export location (`IoFailure`)
/// 3. Probe the external app; if present, open the deep link
///    (`ShareFailure`), otherwise prompt for the gallery fallback
///
/// Nothing is rolled back on failure.
pub async fn perform_share(
    request: ShareRequest,
    dependencies: Arc<ShareDependencies>,
) -> Result<ShareOutcome> {
    let settings = &request.settings;
    log::info!(
        "Starting share to {} ({:?})",
        settings.app_name,
        settings.platform
    );

    // Step 1: Obtain the composed image
    let image = dependencies.exporter.export(&request.composition)?;
    log::debug!("Exported composition as {}", image);

    // Step 2: Copy to the well-known location
    copy_image(
        Arc::clone(&dependencies.files),
        image,
        settings.export_path.clone(),
    )
    .await?;
    let exported = ImageRef::from_path(&settings.export_path);
    log::info!("Composition copied to {}", settings.export_path.display());

    // Step 3: Hand off to the external app, or offer the gallery
    if dependencies.target.can_open(&settings.probe_uri).await {
        let url = build_share_url(settings, &exported, &request.caption)?;
        log::info!("Opening {}", url);
        dependencies.target.open(&url).await.map_err(|err| match err {
            Error::ShareFailure(_) => err,
            other => Error::ShareFailure(other.to_string()),
        })?;
        return Ok(ShareOutcome::Shared { url });
    }

    log::info!("{} not available, offering gallery save", settings.app_name);
    match dependencies
        .prompter
        .ask_save_fallback(&settings.app_name)
        .await
    {
        FallbackChoice::Cancel => {
            log::info!("Gallery save declined");
            Ok(ShareOutcome::Cancelled)
        }
        FallbackChoice::SaveImage => {
            let saved = save_to_library(
                Arc::clone(&dependencies.files),
                settings.export_path.clone(),
            )
            .await?;
            log::info!("Saved to gallery: {}", saved.display());
            Ok(ShareOutcome::SavedToGallery(saved))
        }
    }
}

async fn copy_image(files: Arc<dyn FileStore>, src: ImageRef, dst: PathBuf) -> Result<()> {
    task::spawn_blocking(move || files.copy(&src, &dst))
        .await
        .map_err(|e| Error::IoFailure(std::io::Error::other(format!("Copy task failed: {}", e))))?
}

async fn save_to_library(files: Arc<dyn FileStore>, path: PathBuf) -> Result<PathBuf> {
    task::spawn_blocking(move || {
        if !files.request_permission().is_granted() {
            return Err(Error::PermissionDenied(
                "media library access is needed to save photos".to_string(),
            ));
        }
        files.save_to_library(&path)
    })
    .await
    .map_err(|e| Error::IoFailure(std::io::Error::other(format!("Save task failed: {}", e))))?
}
