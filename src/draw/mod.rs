//! Drawing primitives for photo annotation.
//!
//! This module defines the geometry the editor works with:
//! - [`Color`]: RGBA color representation with the pen palette
//! - [`Point`] and [`Stroke`]: freehand samples and the gesture that traced them
//! - [`StrokeHistory`]: committed strokes in z-order
//! - [`Segment`]: the independent bars a stroke is rendered as

pub mod color;
pub mod frame;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::StrokeHistory;
pub use render::{Segment, stroke_segments};
pub use stroke::{Point, Stroke};
