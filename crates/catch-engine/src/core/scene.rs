use crate::api::types::EntityId;

/// Anything stored in a `Scene` must expose its identity.
pub trait SceneEntity {
    fn id(&self) -> EntityId;
}

/// Simple entity storage using a flat Vec.
/// Designed for small entity counts (dozens, not millions).
/// Insertion order is preserved, so draw order follows spawn order.
#[derive(Debug, Clone)]
pub struct Scene<E> {
    entities: Vec<E>,
}

impl<E: SceneEntity> Scene<E> {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: E) {
        self.entities.push(entity);
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entities.iter()
    }

    /// Keep only the entities for which `keep` returns true.
    /// Each entity is visited exactly once.
    pub fn retain_mut(&mut self, keep: impl FnMut(&mut E) -> bool) {
        self.entities.retain_mut(keep);
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl<E: SceneEntity> Default for Scene<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Dot {
        id: EntityId,
        y: f32,
    }

    impl SceneEntity for Dot {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn dot(id: u32, y: f32) -> Dot {
        Dot { id: EntityId(id), y }
    }

    #[test]
    fn spawn_keeps_insertion_order() {
        let mut scene = Scene::new();
        for i in [3, 1, 2] {
            scene.spawn(dot(i, 0.0));
        }
        let ids: Vec<u32> = scene.iter().map(|d| d.id().0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn retain_mut_updates_and_filters_in_order() {
        let mut scene = Scene::new();
        scene.spawn(dot(1, 0.0));
        scene.spawn(dot(2, 90.0));
        scene.spawn(dot(3, 10.0));
        scene.retain_mut(|d| {
            d.y += 20.0;
            d.y < 100.0
        });
        let left: Vec<(u32, f32)> = scene.iter().map(|d| (d.id.0, d.y)).collect();
        assert_eq!(left, vec![(1, 20.0), (3, 30.0)]);
    }

    #[test]
    fn clear_empties_the_scene() {
        let mut scene = Scene::new();
        scene.spawn(dot(1, 0.0));
        scene.clear();
        assert!(scene.is_empty());
    }
}
