//! Camera and world error types.

use gamejar_graphics::SurfaceError;

use crate::lifecycle::Lifecycle;

/// Errors raised when a camera view would become unusable for projection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    /// The view's width or height is zero, negative or not finite.
    #[error("camera view must have a positive finite size, got {width}x{height}")]
    InvalidView { width: f64, height: f64 },

    /// The view's corner is not a finite point.
    #[error("camera view must have a finite position, got ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },
}

/// Errors that can occur while configuring or driving a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested lifecycle transition is not allowed from the current state.
    #[error("cannot {action} a world that is {state}")]
    InvalidState {
        action: &'static str,
        state: Lifecycle,
    },

    /// The configuration cannot produce a working world.
    #[error("invalid world configuration: {0}")]
    InvalidConfig(String),

    /// The operating system refused to create the tick loop thread.
    #[error("failed to spawn tick loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    /// The tick loop thread panicked before it could be joined.
    #[error("tick loop thread panicked")]
    LoopPanicked,

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
