//! Drawing context in physical space.

use serde::{Deserialize, Serialize};

/// An RGBA colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);

    /// An opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A rectangle in physical (pixel) space.
///
/// Coordinates stay fractional; rounding to whole pixels is left to the
/// backend doing the blitting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size centred on `(cx, cy)`.
    #[must_use]
    pub fn centred(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }
}

/// An offscreen drawing context handed out by a display surface.
///
/// Nothing drawn becomes visible until the owning surface presents the frame.
pub trait Canvas {
    /// Fill the whole canvas with one colour.
    fn clear(&mut self, color: Color);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: ScreenRect, color: Color);

    /// Outline the ellipse inscribed in `rect`.
    fn stroke_ellipse(&mut self, rect: ScreenRect, color: Color);

    /// Draw a line of text with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centred_rect() {
        let r = ScreenRect::centred(100.0, 50.0, 10.0, 10.0);
        assert_eq!(r, ScreenRect::new(95.0, 45.0, 10.0, 10.0));
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::RED, Color::rgba(255, 0, 0, 255));
    }
}
