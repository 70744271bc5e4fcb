use super::*;
use crate::draw::StrokeHistory;
use crate::draw::color::{BLUE, RED};

#[test]
fn start_opens_stroke_with_one_point() {
    let mut recorder = DrawingRecorder::new();
    recorder.on_touch_start(10.0, 20.0, RED);

    let stroke = recorder.live_stroke().unwrap();
    assert_eq!(stroke.len(), 1);
    assert_eq!(stroke.points()[0].x, 10.0);
    assert_eq!(stroke.points()[0].y, 20.0);
    assert_eq!(stroke.points()[0].color, RED);
}

#[test]
fn moves_capture_color_at_each_event() {
    let mut recorder = DrawingRecorder::new();
    recorder.on_touch_start(0.0, 0.0, RED);
    assert!(recorder.on_touch_move(1.0, 0.0, RED));
    assert!(recorder.on_touch_move(2.0, 0.0, BLUE));

    let colors: Vec<_> = recorder
        .live_stroke()
        .unwrap()
        .points()
        .iter()
        .map(|p| p.color)
        .collect();
    assert_eq!(colors, vec![RED, RED, BLUE]);
}

#[test]
fn move_while_idle_is_ignored() {
    let mut recorder = DrawingRecorder::new();
    assert!(!recorder.on_touch_move(1.0, 1.0, RED));
    assert_eq!(recorder.state, DrawingState::Idle);
}

#[test]
fn end_commits_even_single_point_strokes() {
    let mut recorder = DrawingRecorder::new();
    let mut history = StrokeHistory::new();

    recorder.on_touch_start(5.0, 5.0, RED);
    assert!(recorder.on_touch_end(&mut history));

    assert_eq!(history.len(), 1);
    assert_eq!(history.strokes()[0].len(), 1);
    assert!(!recorder.is_active());
    assert!(recorder.live_stroke().is_none());
}

#[test]
fn end_without_start_commits_nothing() {
    let mut recorder = DrawingRecorder::new();
    let mut history = StrokeHistory::new();
    assert!(!recorder.on_touch_end(&mut history));
    assert!(history.is_empty());
}

#[test]
fn reset_drops_live_stroke() {
    let mut recorder = DrawingRecorder::new();
    let mut history = StrokeHistory::new();
    recorder.on_touch_start(0.0, 0.0, RED);
    recorder.on_touch_move(3.0, 3.0, RED);
    recorder.reset();

    assert!(!recorder.on_touch_end(&mut history));
    assert!(history.is_empty());
}
