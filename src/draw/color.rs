//! RGBA color type, hex conversion and the drawing palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use storysnap::draw::Color;
/// let red = Color::from_hex("#FF0000").unwrap();
/// assert_eq!(red, storysnap::draw::color::RED);
/// assert_eq!(red.to_hex(), "#FF0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` (or `#RRGGBBAA`). The leading `#` is optional.
    ///
    /// Returns `None` for any other length or non-hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        match digits.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
                color.a = channel(6)? as f64 / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// Formats the color as `#RRGGBB`, appending alpha only when not opaque.
    pub fn to_hex(&self) -> String {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02X}{:02X}{:02X}",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b)
        );
        if self.a < 1.0 {
            format!("{rgb}{:02X}", to_u8(self.a))
        } else {
            rgb
        }
    }
}

// ============================================================================
// Predefined Color Constants (selfie editor palette)
// ============================================================================

/// `#FF0000`, the initial pen color.
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// `#00FF00`
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// `#0000FF`
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// `#FFFF00`
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// `#FF00FF`
pub const MAGENTA: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// `#FFFFFF`, also the default story background.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Colors offered by the pen color selector, in display order.
pub const PALETTE: [Color; 5] = [RED, GREEN, BLUE, YELLOW, MAGENTA];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Color::from_hex("#00FF00"), Some(GREEN));
        assert_eq!(Color::from_hex("0000ff"), Some(BLUE));
    }

    #[test]
    fn hex_parsing_rejects_garbage() {
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn hex_parsing_rejects_signed_channels() {
        assert_eq!(Color::from_hex("#+F+F+F"), None);
        assert_eq!(Color::from_hex("+F+F+F+F"), None);
    }

    #[test]
    fn hex_alpha_is_preserved() {
        let color = Color::from_hex("#FF000080").unwrap();
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(color.to_hex(), "#FF000080");
    }

    #[test]
    fn palette_formats_as_source_hex_values() {
        let hex: Vec<String> = PALETTE.iter().map(Color::to_hex).collect();
        assert_eq!(
            hex,
            vec!["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]
        );
    }
}
