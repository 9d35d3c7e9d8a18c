//! # gamejar_math
//!
//! Math types for the gamejar simulation engine. Re-exports [`glam`] for
//! vector arithmetic and defines the axis-aligned [`Transform`] rectangle used
//! for entity footprints and camera views alike.

pub mod transform;

// Re-export glam types for convenience.
pub use glam::{DVec2, dvec2};

pub use transform::Transform;
