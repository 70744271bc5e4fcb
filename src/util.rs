//! Utility functions for color names and photo fitting.
//!
//! This module provides:
//! - Color name mapping for the configuration file
//! - Aspect-preserving "contain" placement of the base photo

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "magenta" (alias "pink"), "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "magenta" | "pink" => Some(MAGENTA),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance per channel). Colors outside the
/// palette are reported by their hex value.
pub fn color_to_name(color: &Color) -> String {
    let near = |a: f64, b: f64| (a - b).abs() < 0.1;
    [
        (RED, "Red"),
        (GREEN, "Green"),
        (BLUE, "Blue"),
        (YELLOW, "Yellow"),
        (MAGENTA, "Magenta"),
        (WHITE, "White"),
        (BLACK, "Black"),
    ]
    .iter()
    .find(|(known, _)| near(known.r, color.r) && near(known.g, color.g) && near(known.b, color.b))
    .map(|(_, name)| (*name).to_string())
    .unwrap_or_else(|| color.to_hex())
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Placement of an image inside a container, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales an image to fit entirely inside a container, preserving aspect
/// ratio, and centers it on the axis with leftover space.
///
/// Returns `None` when either size is degenerate (zero or negative).
pub fn fit_contain(
    image_width: f64,
    image_height: f64,
    container_width: f64,
    container_height: f64,
) -> Option<FitRect> {
    if image_width <= 0.0
        || image_height <= 0.0
        || container_width <= 0.0
        || container_height <= 0.0
    {
        return None;
    }

    let scale = (container_width / image_width).min(container_height / image_height);
    let width = image_width * scale;
    let height = image_height * scale;

    Some(FitRect {
        x: (container_width - width) / 2.0,
        y: (container_height - height) / 2.0,
        width,
        height,
    })
}
