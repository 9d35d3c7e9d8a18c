//! Display modes and the display-surface abstraction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::SurfaceError;

/// A physical resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A display configuration the platform may offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    /// Colour depth in bits per pixel.
    pub bit_depth: u16,
    /// Refresh rate in hertz.
    pub refresh_rate: u16,
}

impl DisplayMode {
    #[must_use]
    pub const fn new(width: u32, height: u32, bit_depth: u16, refresh_rate: u16) -> Self {
        Self {
            width,
            height,
            bit_depth,
            refresh_rate,
        }
    }

    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} : {}-bit colour at {}Hz",
            self.width, self.height, self.bit_depth, self.refresh_rate
        )
    }
}

/// A double-buffered presentation target (a window, a framebuffer, or a
/// headless recorder).
///
/// The engine draws into the offscreen [`Canvas`] returned by
/// [`acquire_canvas`](Self::acquire_canvas) and then calls
/// [`present`](Self::present) to swap the finished frame onto the display.
pub trait DisplaySurface: Send {
    /// The display mode currently in use.
    fn current_mode(&self) -> DisplayMode;

    /// Every mode the platform can switch to.
    fn available_modes(&self) -> Vec<DisplayMode>;

    /// The offscreen drawing context, or `None` while the surface is not yet
    /// initialised. A missing canvas is a transient state, not an error.
    fn acquire_canvas(&mut self) -> Option<&mut dyn Canvas>;

    /// Present the completed offscreen frame.
    fn present(&mut self);

    fn is_fullscreen(&self) -> bool;

    fn set_fullscreen(&mut self, fullscreen: bool);

    /// Switch to one of the [`available_modes`](Self::available_modes).
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnsupportedMode`] if the platform does not
    /// offer `mode`.
    fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), SurfaceError>;

    /// The physical resolution of the current mode.
    fn current_resolution(&self) -> Resolution {
        self.current_mode().resolution()
    }

    /// Switch to the first offered mode with the given resolution.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::UnsupportedResolution`] if no offered mode has
    /// that size.
    fn set_resolution(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let mode = self
            .available_modes()
            .into_iter()
            .find(|m| m.width == width && m.height == height)
            .ok_or(SurfaceError::UnsupportedResolution { width, height })?;
        self.set_display_mode(mode)
    }
}
