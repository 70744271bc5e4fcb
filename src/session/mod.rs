//! The edit session aggregate and canvas composition.
//!
//! An [`EditSession`] is created empty, enters edit mode when a photo is
//! captured, accumulates strokes, stickers and a caption, and is reset on
//! discard or after a successful share. [`EditSession::compose`] derives the
//! layer stack the host draws.

mod core;
mod render;

pub use core::{DEFAULT_STROKE_THICKNESS, EditSession, SessionSettings};
pub use render::{Composition, Layer, PhotoFit};
