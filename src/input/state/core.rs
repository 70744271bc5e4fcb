//! Freehand drawing state machine.

use crate::draw::{Color, Point, Stroke, StrokeHistory};

/// Current drawing state.
///
/// `Idle` until a gesture starts, `Active` while the finger is down and points
/// are accumulating into the live stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a gesture
    #[default]
    Idle,
    /// Finger down, accumulating the live stroke
    Active {
        /// Points traced so far
        stroke: Stroke,
    },
}

/// Accumulates a live stroke during a gesture and commits it on release.
#[derive(Debug, Default)]
pub struct DrawingRecorder {
    /// Current drawing state machine
    pub state: DrawingState,
}

impl DrawingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a gesture start.
    ///
    /// # Behavior
    /// Starts a live stroke holding one point at the touch position, tagged with
    /// `color`. A start while already active discards the unfinished stroke.
    pub fn on_touch_start(&mut self, x: f64, y: f64, color: Color) {
        if let DrawingState::Active { stroke } = &self.state {
            log::debug!(
                "Dropping unfinished stroke with {} points on new gesture",
                stroke.len()
            );
        }
        self.state = DrawingState::Active {
            stroke: Stroke::starting_at(Point::new(x, y, color)),
        };
    }

    /// Processes a drag sample.
    ///
    /// `color` is whatever the selector holds right now, so a color change in
    /// the middle of a gesture shows up on the following points. Moves while
    /// idle are ignored. Returns whether a point was recorded.
    pub fn on_touch_move(&mut self, x: f64, y: f64, color: Color) -> bool {
        match &mut self.state {
            DrawingState::Active { stroke } => {
                stroke.push(Point::new(x, y, color));
                true
            }
            DrawingState::Idle => false,
        }
    }

    /// Processes the end of a gesture.
    ///
    /// # Behavior
    /// Commits the live stroke to `history` whatever its length (a single point
    /// is kept but renders nothing) and returns to `Idle`. Returns whether a
    /// stroke was committed.
    pub fn on_touch_end(&mut self, history: &mut StrokeHistory) -> bool {
        match std::mem::take(&mut self.state) {
            DrawingState::Active { stroke } if !stroke.is_empty() => {
                log::debug!("Committing stroke with {} points", stroke.len());
                history.commit(stroke);
                true
            }
            _ => false,
        }
    }

    /// The in-progress stroke, if a gesture is active.
    pub fn live_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Active { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DrawingState::Active { .. })
    }

    /// Drops any live stroke without committing it.
    pub fn reset(&mut self) {
        self.state = DrawingState::Idle;
    }
}
