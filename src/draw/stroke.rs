//! Freehand stroke primitives.

use super::color::Color;

/// A single sample on a freehand stroke.
///
/// Color is stored per point rather than per stroke: each sample captures the
/// pen color that was selected when its touch event arrived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl Point {
    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Ordered sequence of points traced by one gesture.
///
/// Append-only while live; once committed to a
/// [`StrokeHistory`](super::StrokeHistory) it is never modified again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a stroke with its first sample.
    pub fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke needs at least two points before it draws anything.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}
