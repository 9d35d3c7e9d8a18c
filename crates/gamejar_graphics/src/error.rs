//! Display-surface error types.

use crate::surface::DisplayMode;

/// Errors reported by a [`DisplaySurface`](crate::DisplaySurface).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The platform does not offer the requested display mode.
    #[error("this display mode is not supported: {mode}")]
    UnsupportedMode {
        /// The rejected mode.
        mode: DisplayMode,
    },

    /// No offered display mode has the requested resolution.
    #[error("no display mode with resolution {width}x{height}")]
    UnsupportedResolution { width: u32, height: u32 },
}
