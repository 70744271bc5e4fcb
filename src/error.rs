//! Error taxonomy shared by the camera, export and share paths.

use thiserror::Error;

/// Errors surfaced by capability calls.
///
/// None of these are fatal: the screen recovers at the user action that
/// triggered them and turns them into a [`Notice`](crate::notification::Notice).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("Nothing to export: {0}")]
    ExportFailure(String),

    #[error("File operation failed: {0}")]
    IoFailure(#[from] std::io::Error),

    #[error("Share failed: {0}")]
    ShareFailure(String),
}

pub type Result<T> = std::result::Result<T, Error>;
