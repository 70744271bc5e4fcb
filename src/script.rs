//! Scripted editing steps, replayed onto a session by the CLI.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "action": "mode", "mode": "drawing" },
//!   { "action": "color", "color": "#00FF00" },
//!   { "action": "gesture", "path": [[10, 10], [40, 60]] },
//!   { "action": "mode", "mode": "sticker" },
//!   { "action": "arm", "sticker": 1 },
//!   { "action": "tap", "x": 120, "y": 200 },
//!   { "action": "caption", "text": "hello" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ColorSpec;
use crate::input::{InteractionMode, TouchEvent, TouchPhase};
use crate::session::EditSession;
use crate::sticker::StickerCatalog;

/// One editing action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Mode { mode: InteractionMode },
    Color { color: ColorSpec },
    /// Arms the catalog sticker with this id
    Arm { sticker: u32 },
    Disarm,
    /// Single raw touch sample
    Touch { phase: TouchPhase, x: f64, y: f64 },
    /// Whole gesture traced through `path`
    Gesture { path: Vec<[f64; 2]> },
    /// Press and release at one point
    Tap { x: f64, y: f64 },
    Caption { text: String },
}

pub fn parse(json: &str) -> serde_json::Result<Vec<Step>> {
    serde_json::from_str(json)
}

/// Applies `steps` in order. Steps the session refuses are logged and
/// skipped. Returns how many steps changed the session.
pub fn replay(session: &mut EditSession, catalog: &StickerCatalog, steps: &[Step]) -> usize {
    steps
        .iter()
        .filter(|step| apply(session, catalog, step))
        .count()
}

fn apply(session: &mut EditSession, catalog: &StickerCatalog, step: &Step) -> bool {
    match step {
        Step::Mode { mode } => {
            let changed = session.mode() != *mode;
            session.set_mode(*mode);
            changed
        }
        Step::Color { color } => {
            session.select_color(color.to_color());
            true
        }
        Step::Arm { sticker } => {
            let Some(template) = catalog.get(*sticker) else {
                log::warn!("Sticker {} is not in the catalog", sticker);
                return false;
            };
            let armed = session.arm_sticker(template.clone());
            if !armed {
                log::warn!("Sticker {} cannot be armed in {} mode", sticker, session.mode());
            }
            armed
        }
        Step::Disarm => {
            let changed = session.armed_sticker().is_some();
            session.disarm_sticker();
            changed
        }
        Step::Touch { phase, x, y } => session.handle_touch(TouchEvent {
            phase: *phase,
            x: *x,
            y: *y,
        }),
        Step::Gesture { path } => {
            let path: Vec<(f64, f64)> = path.iter().map(|&[x, y]| (x, y)).collect();
            session.handle_touches(TouchEvent::gesture(&path))
        }
        Step::Tap { x, y } => {
            session.handle_touches([TouchEvent::start(*x, *y), TouchEvent::end(*x, *y)])
        }
        Step::Caption { text } => {
            session.set_caption(text.as_str());
            true
        }
    }
}
