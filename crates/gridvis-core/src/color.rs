use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White→red heat ramp for `value` out of `max_value`.
    ///
    /// `max_value` of zero is treated as one.
    pub fn heat(value: u32, max_value: u32) -> Self {
        let denom = max_value.max(1) as f64;
        let channel = (255.0 * value as f64 / denom).round().clamp(0.0, 255.0) as u8;
        Self::new(255, 255 - channel, 255 - channel)
    }

    /// `#rrggbb` with every channel zero-padded to two lowercase hex digits.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(1, 15, 16), "#010f10");
        assert_eq!(Color::new(201, 201, 201).to_string(), "#c9c9c9");
    }

    #[test]
    fn test_heat_ramp_endpoints() {
        assert_eq!(Color::heat(0, 1).to_hex(), "#ffffff");
        assert_eq!(Color::heat(10, 10).to_hex(), "#ff0000");
        // round(255 * 1 / 2) = 128
        assert_eq!(Color::heat(1, 2).to_hex(), "#ff7f7f");
    }

    #[test]
    fn test_heat_zero_denominator() {
        assert_eq!(Color::heat(0, 0).to_hex(), "#ffffff");
    }
}
