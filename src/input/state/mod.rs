mod core;
#[cfg(test)]
mod tests;

pub use core::{DrawingRecorder, DrawingState};
