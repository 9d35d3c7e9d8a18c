//! Drawable trait and the built-in solid-colour drawable.

use std::fmt;

use crate::canvas::{Canvas, Color, ScreenRect};

/// Something that can paint itself, scaled, into a rectangle of a [`Canvas`].
///
/// Drawables are shared between entities and the render loop, so they must be
/// `Send + Sync`. Image-backed implementations live with the platform layer.
pub trait Drawable: Send + Sync + fmt::Debug {
    /// The unscaled size in pixels, as `(width, height)`.
    fn native_size(&self) -> (u32, u32);

    /// Paint into `dest`, stretching to fill it.
    fn draw_scaled(&self, canvas: &mut dyn Canvas, dest: ScreenRect);
}

/// A flat rectangle of colour with a nominal native size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidColor {
    color: Color,
    width: u32,
    height: u32,
}

impl SolidColor {
    #[must_use]
    pub const fn new(color: Color, width: u32, height: u32) -> Self {
        Self {
            color,
            width,
            height,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Drawable for SolidColor {
    fn native_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_scaled(&self, canvas: &mut dyn Canvas, dest: ScreenRect) {
        canvas.fill_rect(dest, self.color);
    }
}
