//! Export copy and gallery saving on the local filesystem.

use crate::error::{Error, Result};
use crate::image::ImageRef;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the composed image is exported under before handoff.
pub const DEFAULT_EXPORT_FILENAME: &str = "image-to-share.jpg";

/// Configuration for gallery saving.
#[derive(Debug, Clone)]
pub struct GallerySaveConfig {
    /// Directory standing in for the device photo library.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for GallerySaveConfig {
    fn default() -> Self {
        Self {
            save_directory: default_gallery_directory(),
            filename_template: "storysnap_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

/// `<Pictures>/StorySnap`, or `./StorySnap` when no pictures directory exists.
pub fn default_gallery_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("StorySnap")
}

/// The well-known temporary location for exports: `<cache dir>/<filename>`.
pub fn export_path(filename: &str) -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(filename)
}

/// Generate a filename based on the template and current time, keeping the
/// source file's extension.
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    format!("{}.{}", now.format(template), extension)
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Copy the image behind `src` to `dst`, replacing any previous export.
pub fn copy_image(src: &ImageRef, dst: &Path) -> Result<()> {
    let source = src.to_path().ok_or_else(|| {
        Error::IoFailure(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("cannot resolve '{}' to a local file", src),
        ))
    })?;

    if let Some(parent) = dst.parent() {
        ensure_directory_exists(parent)?;
    }

    let bytes = fs::copy(&source, dst)?;
    log::debug!(
        "Copied {} -> {} ({} bytes)",
        source.display(),
        dst.display(),
        bytes
    );
    Ok(())
}

/// Save the file at `path` into the gallery directory.
///
/// # Returns
/// Path of the saved copy
pub fn save_to_gallery(path: &Path, config: &GallerySaveConfig) -> Result<PathBuf> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("jpg");
    let mut target = directory.join(generate_filename(&config.filename_template, extension));

    // Two saves within the same second would otherwise overwrite each other.
    let mut counter = 1;
    while target.exists() {
        let stem = generate_filename(&config.filename_template, "");
        target = directory.join(format!(
            "{}-{}.{}",
            stem.trim_end_matches('.'),
            counter,
            extension
        ));
        counter += 1;
    }

    log::info!("Saving image to gallery: {}", target.display());
    fs::copy(path, &target)?;

    // Set permissions to user read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&target, Permissions::from_mode(0o600))?;
    }

    Ok(target)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
