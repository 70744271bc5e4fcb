//! Generic touch event types for cross-host compatibility.

use serde::{Deserialize, Serialize};

/// Phase of a continuous touch gesture.
///
/// A gesture is always `Start`, any number of `Move`s, then `End`. Hosts map
/// their native pointer/pan callbacks onto these phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// Finger down (pan responder grant)
    Start,
    /// Finger dragged
    Move,
    /// Finger lifted (pan responder release)
    End,
}

/// A touch sample in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub x: f64,
    pub y: f64,
}

impl TouchEvent {
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Start,
            x,
            y,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::Move,
            x,
            y,
        }
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self {
            phase: TouchPhase::End,
            x,
            y,
        }
    }

    /// Expands a traced path into a full gesture: `Start` at the first point,
    /// `Move` for every following point, `End` at the last point.
    ///
    /// An empty path yields no events.
    pub fn gesture(path: &[(f64, f64)]) -> Vec<TouchEvent> {
        let Some((&(first_x, first_y), rest)) = path.split_first() else {
            return Vec::new();
        };
        let (last_x, last_y) = path[path.len() - 1];

        let mut events = Vec::with_capacity(path.len() + 1);
        events.push(Self::start(first_x, first_y));
        events.extend(rest.iter().map(|&(x, y)| Self::moved(x, y)));
        events.push(Self::end(last_x, last_y));
        events
    }
}
