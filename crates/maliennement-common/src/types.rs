use serde::{Deserialize, Serialize};

/// A rectangle in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// A rect anchored at the origin covering `width` x `height`.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// A `size` x `size` square centered inside `self`.
    ///
    /// Shrinks to fit when `self` is smaller than `size`.
    pub fn centered_square(&self, size: f64) -> Self {
        let side = size.min(self.width).min(self.height).max(0.0);
        Self {
            x: self.x + (self.width - side) / 2.0,
            y: self.y + (self.height - side) / 2.0,
            width: side,
            height: side,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgba(255, 255, 255, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::from_rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    /// CSS `rgba()` form with the alpha channel normalized to 0.0-1.0.
    pub fn to_css(&self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#6650a4").unwrap();
        assert_eq!(c, Color::from_rgba(0x66, 0x50, 0xa4, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("ffffff80").unwrap();
        assert_eq!(c, Color::from_rgba(255, 255, 255, 128));
    }

    #[test]
    fn color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
        assert!(Color::from_hex("#ééé").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_to_css_normalizes_alpha() {
        assert_eq!(Color::WHITE.to_css(), "rgba(255, 255, 255, 1.000)");
        assert_eq!(
            Color::from_rgba(0, 0, 0, 0).to_css(),
            "rgba(0, 0, 0, 0.000)"
        );
    }

    #[test]
    fn centered_square_inside_window() {
        let window = Rect::from_size(400.0, 800.0);
        let square = window.centered_square(48.0);
        assert_eq!(square.width, 48.0);
        assert_eq!(square.height, 48.0);
        assert_eq!(square.x, 176.0);
        assert_eq!(square.y, 376.0);
    }

    #[test]
    fn centered_square_shrinks_to_fit() {
        let tiny = Rect::from_size(20.0, 30.0);
        let square = tiny.centered_square(48.0);
        assert_eq!(square.width, 20.0);
        assert_eq!(square.x, 0.0);
        assert_eq!(square.y, 5.0);
    }

    #[test]
    fn empty_rect() {
        assert!(Rect::from_size(0.0, 100.0).is_empty());
        assert!(!Rect::from_size(1.0, 1.0).is_empty());
    }
}
