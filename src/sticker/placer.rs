//! Single-shot sticker placement.

use super::catalog::StickerTemplate;
use crate::image::ImageRef;
use chrono::Utc;

/// Rendered width and height of a placed sticker, in canvas pixels.
pub const DEFAULT_STICKER_FOOTPRINT: f64 = 80.0;

/// A sticker dropped onto the photo.
///
/// The position is the top-left corner and is fixed at creation; there is no
/// drag-to-reposition or removal.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSticker {
    /// Unique, derived from the wall clock in milliseconds
    pub id: u64,
    pub template_id: u32,
    pub image: ImageRef,
    pub x: f64,
    pub y: f64,
}

/// Turns a touch into a [`PlacedSticker`] centered on the touch point.
#[derive(Debug)]
pub struct StickerPlacer {
    footprint: f64,
    last_id: u64,
}

impl Default for StickerPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_STICKER_FOOTPRINT)
    }
}

impl StickerPlacer {
    pub fn new(footprint: f64) -> Self {
        Self {
            footprint,
            last_id: 0,
        }
    }

    pub fn footprint(&self) -> f64 {
        self.footprint
    }

    /// Creates a sticker whose center is `(x, y)`.
    ///
    /// The stored corner is `(x - F/2, y - F/2)` for footprint `F`.
    pub fn place(&mut self, template: &StickerTemplate, x: f64, y: f64) -> PlacedSticker {
        let half = self.footprint / 2.0;
        let sticker = PlacedSticker {
            id: self.next_id(),
            template_id: template.id,
            image: template.image.clone(),
            x: x - half,
            y: y - half,
        };
        log::debug!(
            "Placed sticker {} (template {}) at ({:.1}, {:.1})",
            sticker.id,
            sticker.template_id,
            sticker.x,
            sticker.y
        );
        sticker
    }

    // Millisecond timestamps collide on fast double taps; bump past the last id.
    fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
