//! Committed stroke history for the current photo.

use super::stroke::Stroke;

/// Container for all strokes committed during an edit session.
///
/// Insertion order is z-order: the first stroke is the bottom layer, the last
/// is drawn on top. The history only ever grows until [`clear`](Self::clear)
/// is called on discard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished stroke on top of the existing ones.
    ///
    /// Strokes with a single point are accepted; they simply render nothing.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Removes every stroke, clearing the drawing.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, color::RED};

    #[test]
    fn commit_preserves_insertion_order() {
        let mut history = StrokeHistory::new();
        history.commit(Stroke::starting_at(Point::new(1.0, 1.0, RED)));
        history.commit(Stroke::from(vec![
            Point::new(2.0, 2.0, RED),
            Point::new(3.0, 3.0, RED),
        ]));

        assert_eq!(history.len(), 2);
        assert_eq!(history.strokes()[0].len(), 1);
        assert_eq!(history.strokes()[1].len(), 2);

        history.clear();
        assert!(history.is_empty());
    }
}
