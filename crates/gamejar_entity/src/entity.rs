//! Entity type and shared entity handles.
//!
//! An [`Entity`] owns its transform and behaviour, borrows a drawable, and
//! carries a draw height fixed at construction. Entities are registered and
//! looked up through [`EntityRef`] handles; identity is the handle's pointer,
//! never the entity's contents.

use std::fmt;
use std::sync::Arc;

use gamejar_graphics::Drawable;
use gamejar_math::Transform;
use parking_lot::Mutex;

use crate::behavior::{Behavior, Idle, UpdateFn};

/// A shared handle to an entity.
pub type EntityRef = Arc<Entity>;

/// The mutable half of an entity, updated under one lock so readers never see
/// a half-written transform.
struct EntityState {
    transform: Transform,
    behavior: Box<dyn Behavior>,
}

/// A single simulated object in a world.
///
/// Entities with a larger height are drawn over those with a smaller height
/// where they overlap. The height cannot change: to move an entity to another
/// layer, remove it from its registry and insert a new entity.
pub struct Entity {
    height: i32,
    drawable: Arc<dyn Drawable>,
    state: Mutex<EntityState>,
}

impl Entity {
    /// Create an idle entity at `(x, y)` sized to the drawable's native size.
    #[must_use]
    pub fn new(x: f64, y: f64, drawable: Arc<dyn Drawable>, height: i32) -> Self {
        let (width, h) = drawable.native_size();
        Self {
            height,
            drawable,
            state: Mutex::new(EntityState {
                transform: Transform::new(x, y, f64::from(width), f64::from(h)),
                behavior: Box::new(Idle),
            }),
        }
    }

    /// Create an idle entity at height 0.
    #[must_use]
    pub fn at(x: f64, y: f64, drawable: Arc<dyn Drawable>) -> Self {
        Self::new(x, y, drawable, 0)
    }

    /// Replace the entity's behaviour.
    #[must_use]
    pub fn with_behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.state.get_mut().behavior = Box::new(behavior);
        self
    }

    /// Use a closure as the entity's behaviour.
    #[must_use]
    pub fn with_update<F>(self, f: F) -> Self
    where
        F: FnMut(&mut Transform, f64) + Send + 'static,
    {
        self.with_behavior(UpdateFn::new(f))
    }

    /// Override the world-space size taken from the drawable.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.state.get_mut().transform.set_size(width, height);
        self
    }

    /// Wrap the entity in a shared handle for registration.
    #[must_use]
    pub fn into_ref(self) -> EntityRef {
        Arc::new(self)
    }

    /// The draw-order key.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn drawable(&self) -> &dyn Drawable {
        self.drawable.as_ref()
    }

    /// A consistent snapshot of the entity's transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.lock().transform
    }

    /// Mutate the transform in place.
    pub fn with_transform<R>(&self, f: impl FnOnce(&mut Transform) -> R) -> R {
        f(&mut self.state.lock().transform)
    }

    /// Simulate `dt` seconds by running the entity's behaviour.
    ///
    /// A behaviour must not read its own entity through a handle; the entity
    /// is locked for the duration of the call.
    pub fn update(&self, dt: f64) {
        let mut state = self.state.lock();
        let EntityState {
            transform,
            behavior,
        } = &mut *state;
        behavior.update(transform, dt);
    }

    /// The behaviour's name followed by the transform, for debug overlays.
    #[must_use]
    pub fn describe(&self) -> String {
        let state = self.state.lock();
        format!("{}: {}", state.behavior.name(), state.transform)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Entity")
            .field("height", &self.height)
            .field("behavior", &state.behavior.name())
            .field("transform", &state.transform)
            .field("drawable", &self.drawable)
            .finish()
    }
}
