//! Per-tick entity behaviours.
//!
//! A [`Behavior`] receives its entity's transform once per simulation tick
//! together with the elapsed time `dt` in seconds. Scaling by `dt` keeps
//! motion measured in units per second rather than units per tick.

use gamejar_math::{DVec2, Transform};

use crate::entity::EntityRef;

/// Update logic attached to an entity.
pub trait Behavior: Send {
    /// Advance by `dt` seconds, mutating the owning entity's transform.
    fn update(&mut self, transform: &mut Transform, dt: f64);

    /// Name used in entity descriptions.
    fn name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strip the module path from a type name (`a::b::Velocity` → `Velocity`).
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Does nothing. The default for newly built entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Behavior for Idle {
    fn update(&mut self, _transform: &mut Transform, _dt: f64) {}
}

/// Constant linear motion in world units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub linear: DVec2,
}

impl Velocity {
    #[must_use]
    pub const fn new(vx: f64, vy: f64) -> Self {
        Self {
            linear: DVec2::new(vx, vy),
        }
    }
}

impl Behavior for Velocity {
    fn update(&mut self, transform: &mut Transform, dt: f64) {
        let delta = self.linear * dt;
        transform.translate(delta.x, delta.y);
    }
}

/// Keeps the entity at a fixed offset from another entity.
///
/// Reads the target's transform during the tick, so a follower registered
/// above its target sees the target's position for the current tick. The
/// target must be a different entity.
#[derive(Debug, Clone)]
pub struct Follow {
    target: EntityRef,
    offset: DVec2,
}

impl Follow {
    #[must_use]
    pub fn new(target: EntityRef, offset: DVec2) -> Self {
        Self { target, offset }
    }
}

impl Behavior for Follow {
    fn update(&mut self, transform: &mut Transform, _dt: f64) {
        let anchor = self.target.transform().position() + self.offset;
        transform.set_position(anchor.x, anchor.y);
    }
}

/// Closure-backed behaviour for one-off update rules.
pub struct UpdateFn<F> {
    f: F,
}

impl<F> UpdateFn<F>
where
    F: FnMut(&mut Transform, f64) + Send,
{
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Behavior for UpdateFn<F>
where
    F: FnMut(&mut Transform, f64) + Send,
{
    fn update(&mut self, transform: &mut Transform, dt: f64) {
        (self.f)(transform, dt);
    }

    fn name(&self) -> &'static str {
        "UpdateFn"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gamejar_graphics::{Color, SolidColor};

    use super::*;
    use crate::entity::Entity;

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("gamejar_entity::behavior::Velocity"), "Velocity");
        assert_eq!(short_type_name("a::UpdateFn<a::b::{{closure}}>"), "UpdateFn");
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_velocity_scales_by_dt() {
        let mut t = Transform::new(0.0, 0.0, 10.0, 10.0);
        let mut v = Velocity::new(50.0, -10.0);
        v.update(&mut t, 0.5);
        assert!((t.x() - 25.0).abs() < 1e-9);
        assert!((t.y() + 5.0).abs() < 1e-9);
        assert_eq!(v.name(), "Velocity");
    }

    #[test]
    fn test_idle_leaves_transform() {
        let mut t = Transform::new(1.0, 2.0, 3.0, 4.0);
        Idle.update(&mut t, 1.0);
        assert_eq!(t, Transform::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_follow_tracks_target() {
        let target = Entity::new(10.0, 20.0, Arc::new(SolidColor::new(Color::RED, 4, 4)), 0)
            .into_ref();
        let mut follow = Follow::new(target.clone(), DVec2::new(5.0, 0.0));
        let mut t = Transform::new(0.0, 0.0, 4.0, 4.0);
        follow.update(&mut t, 0.016);
        assert_eq!(t.position(), DVec2::new(15.0, 20.0));

        target.with_transform(|tt| tt.translate(1.0, 1.0));
        follow.update(&mut t, 0.016);
        assert_eq!(t.position(), DVec2::new(16.0, 21.0));
    }

    #[test]
    fn test_update_fn_runs_closure() {
        let mut calls = 0u32;
        {
            let mut behavior = UpdateFn::new(|t: &mut Transform, dt: f64| {
                t.scale(1.0 + dt);
                calls += 1;
            });
            let mut t = Transform::new(0.0, 0.0, 2.0, 2.0);
            behavior.update(&mut t, 1.0);
            assert_eq!(t.size(), DVec2::new(4.0, 4.0));
            assert_eq!(behavior.name(), "UpdateFn");
        }
        assert_eq!(calls, 1);
    }
}
