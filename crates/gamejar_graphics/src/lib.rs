//! # gamejar_graphics
//!
//! The graphics collaborators the engine renders through. Window creation and
//! image decoding live outside the engine; this crate only names the seams:
//!
//! - [`Canvas`]: an offscreen drawing context in physical (pixel) space.
//! - [`Drawable`]: anything that can paint itself scaled into a rectangle.
//! - [`DisplaySurface`]: a double-buffered presentation target.
//! - [`DisplayMode`]: a resolution, colour depth and refresh rate.
//!
//! Two concrete collaborators work without any windowing system:
//! [`SolidColor`] and the headless [`RecordingSurface`].

pub mod canvas;
pub mod drawable;
pub mod error;
pub mod recording;
pub mod surface;

pub use canvas::{Canvas, Color, ScreenRect};
pub use drawable::{Drawable, SolidColor};
pub use error::SurfaceError;
pub use recording::{DrawCommand, Frame, RecordingCanvas, RecordingSurface};
pub use surface::{DisplayMode, DisplaySurface, Resolution};
