//! Segment decomposition for freehand strokes.
//!
//! A stroke is not rendered as one path. Each consecutive point pair becomes an
//! independent [`Segment`]: a fixed-thickness bar anchored at the earlier point
//! and rotated about that anchor. Hosts draw segments with whatever primitive
//! they have (a rotated view, a canvas line, a quad).

use super::color::Color;
use super::stroke::Point;

/// One drawable bar between two consecutive stroke points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Anchor X (the earlier point)
    pub x: f64,
    /// Anchor Y (the earlier point)
    pub y: f64,
    /// Euclidean distance to the later point
    pub length: f64,
    /// Rotation about the anchor in radians, `atan2(dy, dx)`
    pub angle: f64,
    /// Bar thickness in pixels
    pub thickness: f64,
    /// Color of the later point of the pair
    pub color: Color,
}

impl Segment {
    /// End point reached by rotating the bar about its anchor.
    pub fn end(&self) -> (f64, f64) {
        (
            self.x + self.length * self.angle.cos(),
            self.y + self.length * self.angle.sin(),
        )
    }
}

/// Splits a point sequence into segments.
///
/// Fewer than two points yield nothing; otherwise exactly `points.len() - 1`
/// segments are produced, in stroke order.
pub fn stroke_segments(points: &[Point], thickness: f64) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let dx = to.x - from.x;
            let dy = to.y - from.y;
            Segment {
                x: from.x,
                y: from.y,
                length: dx.hypot(dy),
                angle: dy.atan2(dx),
                thickness,
                color: to.color,
            }
        })
        .collect()
}
