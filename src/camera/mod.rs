//! Camera capability and shutter control.
//!
//! This module provides:
//! - The [`CameraDevice`] trait hosts implement over their native camera
//! - [`CameraController`], which tracks permission, readiness and an in-flight
//!   capture flag
//! - [`StillImageCamera`], a file-backed device for desktop runs

mod controller;
mod dependencies;
pub mod types;
#[cfg(test)]
mod tests;

pub use controller::CameraController;
pub use dependencies::{CameraDevice, StillImageCamera};
pub use types::{CameraFacing, CaptureOutcome, PermissionStatus, PreviewState};
