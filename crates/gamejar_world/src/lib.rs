//! # gamejar_world
//!
//! The simulation-and-projection engine.
//!
//! A [`World`] owns an [`EntityRegistry`](gamejar_entity::EntityRegistry), a
//! [`Camera`] and a display surface. Once started it runs a fixed-tick loop on
//! its own thread: each tick simulates every entity in ascending height order
//! with the real elapsed time, then renders the entities the camera can see,
//! back to front, and presents the frame.
//!
//! - [`camera`]: logical-to-physical projection, culling and the debug overlay.
//! - [`tick`]: the pure tick-boundary decision logic.
//! - [`world`]: lifecycle, shared state and the loop thread.
//! - [`config`]: world configuration.
//! - [`error`]: camera and world error types.

pub mod camera;
pub mod config;
pub mod error;
pub mod lifecycle;
mod signal;
pub mod tick;
pub mod world;

pub use camera::{Camera, FrameReport};
pub use config::WorldConfig;
pub use error::{CameraError, WorldError};
pub use lifecycle::Lifecycle;
pub use tick::{TickDecision, TickScheduler};
pub use world::World;
