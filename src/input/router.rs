//! Gesture routing between the drawing recorder and the sticker placer.

use super::events::{TouchEvent, TouchPhase};
use super::tool::InteractionMode;

/// Handler that owns a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureTarget {
    /// Feed the drawing recorder
    Drawing,
    /// Feed the sticker placer (only the `Start` event matters)
    Sticker,
    /// Nobody listens; the gesture mutates nothing
    Ignored,
}

/// Picks a handler when a gesture starts and pins it until the gesture ends.
///
/// Mode switches in the middle of a gesture never retarget it: the pinned
/// handler keeps receiving `Move` and `End` until the finger lifts.
#[derive(Debug, Default)]
pub struct TouchRouter {
    active: Option<GestureTarget>,
}

impl TouchRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handler for `event`.
    ///
    /// `Move`/`End` without a preceding `Start` resolve to
    /// [`GestureTarget::Ignored`]. A `Start` arriving while a gesture is
    /// still pinned replaces it (the host lost the previous release).
    pub fn route(
        &mut self,
        event: &TouchEvent,
        mode: InteractionMode,
        sticker_armed: bool,
    ) -> GestureTarget {
        match event.phase {
            TouchPhase::Start => {
                let target = match mode {
                    InteractionMode::Drawing => GestureTarget::Drawing,
                    InteractionMode::Sticker if sticker_armed => GestureTarget::Sticker,
                    InteractionMode::Sticker => GestureTarget::Ignored,
                };
                if let Some(previous) = self.active.replace(target) {
                    log::debug!("Gesture start while {:?} gesture was pinned", previous);
                }
                target
            }
            TouchPhase::Move => self.active.unwrap_or(GestureTarget::Ignored),
            TouchPhase::End => self.active.take().unwrap_or(GestureTarget::Ignored),
        }
    }

    /// Handler pinned to the in-flight gesture, if any.
    pub fn active(&self) -> Option<GestureTarget> {
        self.active
    }

    /// Forgets any in-flight gesture.
    pub fn reset(&mut self) {
        self.active = None;
    }
}
