//! Export and share pipeline.
//!
//! This module hands the composed photo to an external story composer:
//! - Export of the composition and copy to a fixed shareable location
//! - Deep link construction for the two link schemes
//! - URL handoff through a [`ShareTarget`]
//! - Gallery fallback when the external app is missing

pub mod deeplink;
pub mod file;
pub mod types;

mod dependencies;
mod pipeline;
mod xdg;
#[cfg(test)]
mod tests;

pub use dependencies::{
    BasePhotoExporter, Exporter, FileStore, FixedPrompter, LocalFileStore, Prompter,
    ShareDependencies, ShareTarget, XdgShareTarget,
};
pub use pipeline::perform_share;
pub use types::{FallbackChoice, SharePlatform, ShareOutcome, ShareRequest, ShareSettings};
