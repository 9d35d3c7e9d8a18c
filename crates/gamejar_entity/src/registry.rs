//! Height-ordered entity registry.
//!
//! [`EntityRegistry`] keeps entity handles sorted by ascending height, so the
//! natural iteration order is both the simulation order and the back-to-front
//! painting order. Membership is by handle identity.
//!
//! Insertion and removal shift the backing vector (O(n)), and spatial queries
//! are a linear scan with no spatial index. That is fine for dozens to
//! hundreds of entities and is the scaling limit of this container.

use std::sync::Arc;

use gamejar_math::Transform;

use crate::entity::EntityRef;

/// An ordered collection of entities, lowest height first.
///
/// For every adjacent pair `(a, b)`, `a.height() <= b.height()`. The relative
/// order of entities sharing a height is not part of the contract.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<EntityRef>,
}

impl EntityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Register an entity at its height-ordered position.
    ///
    /// Returns `false` without changing anything if this exact entity is
    /// already registered.
    pub fn insert(&mut self, entity: EntityRef) -> bool {
        if self.contains(&entity) {
            return false;
        }
        // Lands at the start of the run of entities sharing its height.
        let height = entity.height();
        let index = self.entities.partition_point(|e| e.height() < height);
        self.entities.insert(index, entity);
        true
    }

    /// Unregister an entity, keeping the order of the rest.
    ///
    /// Returns `true` if the entity was registered.
    pub fn remove(&mut self, entity: &EntityRef) -> bool {
        match self.position(entity) {
            Some(index) => {
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if this exact entity is registered.
    #[must_use]
    pub fn contains(&self, entity: &EntityRef) -> bool {
        self.position(entity).is_some()
    }

    fn position(&self, entity: &EntityRef) -> Option<usize> {
        self.entities.iter().position(|e| Arc::ptr_eq(e, entity))
    }

    /// Iterate in ascending height order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        self.entities.iter()
    }

    /// A copy of the handle list, in ascending height order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<EntityRef> {
        self.entities.clone()
    }

    /// Entities whose transform intersects `region`, in ascending height order.
    #[must_use]
    pub fn query_intersecting(&self, region: &Transform) -> Vec<EntityRef> {
        self.entities
            .iter()
            .filter(|e| region.intersects(&e.transform()))
            .cloned()
            .collect()
    }

    /// Entities intersecting `region`, each paired with the transform that
    /// passed the test, in ascending height order.
    ///
    /// Each entity's transform is read once, so the paired copy is the one to
    /// draw from even if the entity moves afterwards.
    #[must_use]
    pub fn cull(&self, region: &Transform) -> Vec<(EntityRef, Transform)> {
        self.entities
            .iter()
            .filter_map(|e| {
                let transform = e.transform();
                region
                    .intersects(&transform)
                    .then(|| (Arc::clone(e), transform))
            })
            .collect()
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no entity is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Unregister everything.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl<'a> IntoIterator for &'a EntityRegistry {
    type Item = &'a EntityRef;
    type IntoIter = std::slice::Iter<'a, EntityRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use gamejar_graphics::{Color, SolidColor};

    use super::*;
    use crate::entity::Entity;

    fn entity_at(x: f64, y: f64, height: i32) -> EntityRef {
        Entity::new(x, y, Arc::new(SolidColor::new(Color::WHITE, 10, 10)), height).into_ref()
    }

    fn heights(registry: &EntityRegistry) -> Vec<i32> {
        registry.iter().map(|e| e.height()).collect()
    }

    fn assert_sorted(registry: &EntityRegistry) {
        let hs = heights(registry);
        assert!(hs.windows(2).all(|w| w[0] <= w[1]), "unsorted: {hs:?}");
    }

    #[test]
    fn test_insert_keeps_height_order() {
        let mut registry = EntityRegistry::new();
        for h in [30, 45, -2, 10, 45, 0, 30, 100, -2] {
            assert!(registry.insert(entity_at(0.0, 0.0, h)));
            assert_sorted(&registry);
        }
        assert_eq!(heights(&registry), vec![-2, -2, 0, 10, 30, 30, 45, 45, 100]);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut registry = EntityRegistry::new();
        let e = entity_at(0.0, 0.0, 5);
        assert!(registry.insert(e.clone()));
        assert!(!registry.insert(e.clone()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_equal_contents_are_distinct_entities() {
        let mut registry = EntityRegistry::new();
        assert!(registry.insert(entity_at(1.0, 1.0, 5)));
        assert!(registry.insert(entity_at(1.0, 1.0, 5)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_non_member() {
        let mut registry = EntityRegistry::new();
        registry.insert(entity_at(0.0, 0.0, 1));
        registry.insert(entity_at(0.0, 0.0, 2));
        let before = heights(&registry);

        assert!(!registry.remove(&entity_at(0.0, 0.0, 1)));
        assert_eq!(heights(&registry), before);
    }

    #[test]
    fn test_remove_member_preserves_order() {
        let mut registry = EntityRegistry::new();
        let middle = entity_at(0.0, 0.0, 20);
        registry.insert(entity_at(0.0, 0.0, 30));
        registry.insert(middle.clone());
        registry.insert(entity_at(0.0, 0.0, 10));
        registry.insert(entity_at(0.0, 0.0, 40));

        assert!(registry.remove(&middle));
        assert_eq!(registry.len(), 3);
        assert!(!registry.contains(&middle));
        assert_eq!(heights(&registry), vec![10, 30, 40]);
        assert!(!registry.remove(&middle));
    }

    #[test]
    fn test_mixed_inserts_and_removes_stay_sorted() {
        let mut registry = EntityRegistry::new();
        let mut handles = Vec::new();
        // Deterministic pseudo-random heights.
        let mut seed = 17u32;
        for _ in 0..64 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let height = (seed >> 16) as i32 % 7 - 3;
            let e = entity_at(0.0, 0.0, height);
            registry.insert(e.clone());
            handles.push(e);
            if seed % 3 == 0 {
                let victim = handles.remove((seed as usize) % handles.len());
                assert!(registry.remove(&victim));
            }
            assert_sorted(&registry);
        }
        assert_eq!(registry.len(), handles.len());
    }

    #[test]
    fn test_query_intersecting_culls() {
        let mut registry = EntityRegistry::new();
        let inside = entity_at(10.0, 10.0, 3);
        let partial = entity_at(95.0, 95.0, 1);
        let outside = entity_at(500.0, 0.0, 2);
        registry.insert(inside.clone());
        registry.insert(partial.clone());
        registry.insert(outside.clone());

        let view = Transform::new(0.0, 0.0, 100.0, 100.0);
        let visible = registry.query_intersecting(&view);
        assert_eq!(visible.len(), 2);
        assert!(Arc::ptr_eq(&visible[0], &partial));
        assert!(Arc::ptr_eq(&visible[1], &inside));
    }

    #[test]
    fn test_query_sees_moved_entities() {
        let mut registry = EntityRegistry::new();
        let e = entity_at(500.0, 500.0, 0);
        registry.insert(e.clone());
        let view = Transform::new(0.0, 0.0, 100.0, 100.0);
        assert!(registry.query_intersecting(&view).is_empty());

        e.with_transform(|t| t.set_position(50.0, 50.0));
        assert_eq!(registry.query_intersecting(&view).len(), 1);
    }

    #[test]
    fn test_cull_pairs_with_tested_transform() {
        let mut registry = EntityRegistry::new();
        let e = entity_at(10.0, 10.0, 0);
        registry.insert(e.clone());
        registry.insert(entity_at(500.0, 500.0, 1));
        let view = Transform::new(0.0, 0.0, 100.0, 100.0);

        let visible = registry.cull(&view);
        // Moving the entity off-view afterwards does not change the copy.
        e.with_transform(|t| t.set_position(900.0, 900.0));

        assert_eq!(visible.len(), 1);
        assert!(Arc::ptr_eq(&visible[0].0, &e));
        assert_eq!(visible[0].1, Transform::new(10.0, 10.0, 10.0, 10.0));
        assert!(registry.cull(&view).is_empty());
    }

    #[test]
    fn test_snapshot_and_clear() {
        let mut registry = EntityRegistry::new();
        registry.insert(entity_at(0.0, 0.0, 2));
        registry.insert(entity_at(0.0, 0.0, 1));
        let snapshot = registry.snapshot();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(snapshot.iter().map(|e| e.height()).collect::<Vec<_>>(), vec![1, 2]);
    }
}
