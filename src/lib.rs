//! Library exports for the storysnap capture-and-annotate core.
//!
//! Hosts drive a [`screen::Screen`] with touch events and button presses; the
//! supporting modules model strokes, stickers, the edit session, the camera
//! capability, and the share handoff.

pub mod camera;
pub mod config;
pub mod draw;
pub mod error;
pub mod image;
pub mod input;
pub mod notification;
pub mod screen;
pub mod script;
pub mod session;
pub mod share;
pub mod sticker;
pub mod util;

pub use config::Config;
pub use error::{Error, Result};
