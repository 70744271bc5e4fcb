//! Configuration enum types.

use crate::draw::{Color, color::RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#FF00FF"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, magenta, pink, white, black)
    /// or a `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Names are tried first, then hex. Anything else falls back to red with a
    /// warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name)
                .or_else(|| Color::from_hex(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using red", name);
                    RED
                }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Whether the spec names a color [`ColorSpec::to_color`] understands.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => {
                crate::util::name_to_color(name).is_some() || Color::from_hex(name).is_some()
            }
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, MAGENTA};

    #[test]
    fn names_hex_and_rgb_resolve() {
        assert_eq!(ColorSpec::from("blue").to_color(), BLUE);
        assert_eq!(ColorSpec::from("#FF00FF").to_color(), MAGENTA);
        assert_eq!(ColorSpec::Rgb([0, 0, 255]).to_color(), BLUE);
    }

    #[test]
    fn unknown_names_fall_back_to_red() {
        let spec = ColorSpec::from("chartreuse-ish");
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(), RED);
    }
}
