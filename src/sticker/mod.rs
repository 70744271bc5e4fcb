//! Sticker catalog and placement.

pub mod catalog;
pub mod placer;

pub use catalog::{StickerCatalog, StickerTemplate};
pub use placer::{DEFAULT_STICKER_FOOTPRINT, PlacedSticker, StickerPlacer};
