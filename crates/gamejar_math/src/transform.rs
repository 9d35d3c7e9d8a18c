//! Axis-aligned world rectangle.
//!
//! [`Transform`] holds a position (the top-left corner) and a size. It is used
//! both as an entity's footprint in world space and as a camera's view.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A mutable axis-aligned rectangle in world space.
///
/// All setters are total over the reals. Nothing here forbids a negative size;
/// callers that need a strictly positive size (such as a camera view) validate
/// it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Top-left corner.
    position: DVec2,
    /// Width (`x`) and height (`y`).
    size: DVec2,
}

impl Transform {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        position: DVec2::ZERO,
        size: DVec2::ZERO,
    };

    /// Create a rectangle from its corner and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    /// Create a rectangle from position and size vectors.
    #[must_use]
    pub const fn from_position_size(position: DVec2, size: DVec2) -> Self {
        Self { position, size }
    }

    /// Returns the x coordinate of the left edge.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate of the top edge.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Returns the size as `(width, height)`.
    #[must_use]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// The x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.x
    }

    /// The y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.y
    }

    /// Move the left edge to `x`, keeping the size.
    pub fn set_x(&mut self, x: f64) {
        self.set_position(x, self.position.y);
    }

    /// Move the top edge to `y`, keeping the size.
    pub fn set_y(&mut self, y: f64) {
        self.set_position(self.position.x, y);
    }

    /// Set the width, keeping the top-left corner.
    pub fn set_width(&mut self, width: f64) {
        self.set_size(width, self.size.y);
    }

    /// Set the height, keeping the top-left corner.
    pub fn set_height(&mut self, height: f64) {
        self.set_size(self.size.x, height);
    }

    /// Move the rectangle so its top-left corner is at `(x, y)`.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = DVec2::new(x, y);
    }

    /// Move the rectangle by the given offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position += DVec2::new(dx, dy);
    }

    /// Resize the rectangle, keeping its top-left corner fixed.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
    }

    /// Multiply both dimensions by `factor`.
    ///
    /// A factor of zero or below yields a degenerate or negative size.
    pub fn scale(&mut self, factor: f64) {
        self.size *= factor;
    }

    /// Returns `true` if the two rectangles overlap or share an edge.
    ///
    /// A rectangle with a negative width or height is empty and intersects
    /// nothing.
    #[must_use]
    pub fn intersects(&self, other: &Transform) -> bool {
        if self.is_inverted() || other.is_inverted() {
            return false;
        }
        self.x() <= other.right()
            && other.x() <= self.right()
            && self.y() <= other.bottom()
            && other.y() <= self.bottom()
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    #[must_use]
    pub fn contains(&self, other: &Transform) -> bool {
        if self.is_inverted() || other.is_inverted() {
            return false;
        }
        other.x() >= self.x()
            && other.y() >= self.y()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns `true` if the point lies inside the rectangle or on its edge.
    #[must_use]
    pub fn contains_point(&self, point: DVec2) -> bool {
        !self.is_inverted()
            && point.x >= self.x()
            && point.x <= self.right()
            && point.y >= self.y()
            && point.y <= self.bottom()
    }

    fn is_inverted(&self) -> bool {
        self.size.x < 0.0 || self.size.y < 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transform[x={},y={},w={},h={}]",
            self.x(),
            self.y(),
            self.width(),
            self.height()
        )
    }
}
