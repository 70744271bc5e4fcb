//! Touch handling and the drawing state machine.
//!
//! This module translates host touch callbacks into editing actions. The
//! [`TouchRouter`] pins each gesture to one handler at gesture start, and the
//! [`DrawingRecorder`] turns drawing gestures into committed strokes.

pub mod events;
pub mod router;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{TouchEvent, TouchPhase};
pub use router::{GestureTarget, TouchRouter};
pub use state::{DrawingRecorder, DrawingState};
pub use tool::InteractionMode;
