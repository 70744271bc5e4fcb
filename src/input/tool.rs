//! Editor interaction mode selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which handler receives touches on the photo.
///
/// The mode buttons under the canvas switch between the two. The editor opens
/// in `Sticker` mode with nothing armed, so touches do nothing until the user
/// picks a pen or a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Freehand drawing with the selected pen color
    Drawing,
    /// Sticker placement; only active while a template is armed
    #[default]
    Sticker,
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drawing => f.write_str("drawing"),
            Self::Sticker => f.write_str("sticker"),
        }
    }
}
