//! # gamejar_entity
//!
//! The simulated objects of a gamejar world.
//!
//! This crate provides:
//!
//! - [`Entity`]: a world-space footprint, a drawable and a fixed draw height.
//! - [`EntityRef`]: the shared handle entities are registered by. Two handles
//!   name the same entity only if they point at the same allocation.
//! - [`Behavior`]: per-tick update logic, with [`Idle`], [`Velocity`],
//!   [`Follow`] and closure-backed [`UpdateFn`] variants.
//! - [`EntityRegistry`]: the height-ordered collection a world simulates and
//!   renders from.

pub mod behavior;
pub mod entity;
pub mod registry;

pub use behavior::{Behavior, Follow, Idle, UpdateFn, Velocity};
pub use entity::{Entity, EntityRef};
pub use registry::EntityRegistry;
