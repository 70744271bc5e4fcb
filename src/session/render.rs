//! Composition of the visible canvas from session state.

use super::core::EditSession;
use crate::draw::{Segment, Stroke, stroke_segments};
use crate::image::ImageRef;

/// How the base photo is scaled into its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFit {
    /// Fit entirely, preserving aspect ratio (see [`crate::util::fit_contain`])
    Contain,
}

/// One entry of the layer stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// The captured photo, always at the bottom
    Photo { image: ImageRef, fit: PhotoFit },
    /// A stroke decomposed into independent segments
    Stroke {
        segments: Vec<Segment>,
        /// True for the in-progress stroke
        live: bool,
    },
    /// A placed sticker, top-left anchored
    Sticker {
        id: u64,
        image: ImageRef,
        x: f64,
        y: f64,
        size: f64,
    },
}

/// Back-to-front layer stack of the editor canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    pub layers: Vec<Layer>,
}

impl Composition {
    /// The photo at the bottom of the stack, if any.
    pub fn base_photo(&self) -> Option<&ImageRef> {
        self.layers.iter().find_map(|layer| match layer {
            Layer::Photo { image, .. } => Some(image),
            _ => None,
        })
    }

    /// Total number of stroke segments across all stroke layers.
    pub fn segment_count(&self) -> usize {
        self.layers
            .iter()
            .map(|layer| match layer {
                Layer::Stroke { segments, .. } => segments.len(),
                _ => 0,
            })
            .sum()
    }

    pub fn stroke_layer_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| matches!(layer, Layer::Stroke { .. }))
            .count()
    }

    pub fn sticker_layer_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| matches!(layer, Layer::Sticker { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl EditSession {
    /// Derives the visible canvas.
    ///
    /// Pure function of the session. Z-order, back to front: base photo,
    /// committed strokes in insertion order, the live stroke, placed stickers
    /// in insertion order. Strokes with fewer than two points draw nothing
    /// and contribute no layer. Without a photo the stack is empty.
    pub fn compose(&self) -> Composition {
        let Some(photo) = self.photo() else {
            return Composition::default();
        };

        let thickness = self.settings().stroke_thickness;
        let footprint = self.settings().sticker_footprint;
        let stroke_layer = |stroke: &Stroke, live: bool| {
            stroke.is_renderable().then(|| Layer::Stroke {
                segments: stroke_segments(stroke.points(), thickness),
                live,
            })
        };

        let mut layers = Vec::with_capacity(2 + self.strokes().len() + self.stickers().len());
        layers.push(Layer::Photo {
            image: photo.clone(),
            fit: PhotoFit::Contain,
        });
        layers.extend(
            self.strokes()
                .strokes()
                .iter()
                .filter_map(|stroke| stroke_layer(stroke, false)),
        );
        if let Some(live) = self.live_stroke().and_then(|stroke| stroke_layer(stroke, true)) {
            layers.push(live);
        }
        layers.extend(self.stickers().iter().map(|sticker| Layer::Sticker {
            id: sticker.id,
            image: sticker.image.clone(),
            x: sticker.x,
            y: sticker.y,
            size: footprint,
        }));

        Composition { layers }
    }
}
