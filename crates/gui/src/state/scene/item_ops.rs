//! Item add/remove operations

use std::sync::Arc;

use shared::{ItemId, PlacedItem, Point2D, Product, Size2D};

use super::{short_id, ItemList, SceneState};

/// Catalog centimetres per scene unit
pub const SIZE_DIVISOR: f64 = 5.0;

impl ItemList {
    /// New list with a fresh item for `product` appended at `position`.
    ///
    /// The item's z-index is the number of items present before the append.
    pub fn add(&self, id: ItemId, product: &Product, position: Point2D) -> ItemList {
        let item = PlacedItem {
            id,
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            position,
            size: Size2D {
                width: product.dimensions.width / SIZE_DIVISOR,
                height: product.dimensions.height / SIZE_DIVISOR,
            },
            rotation: 0,
            z_index: self.len() as i32,
            scale: 1.0,
        };

        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend(self.0.iter().cloned());
        items.push(Arc::new(item));
        ItemList::from_shared(items)
    }

    /// New list without item `id`; the same list if `id` is absent
    pub fn remove(&self, id: &str) -> ItemList {
        if !self.contains(id) {
            return self.clone();
        }
        ItemList::from_shared(
            self.0
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
        )
    }
}

impl SceneState {
    /// Place a product at scene coordinates and return the new item's id
    pub fn add(&mut self, product: &Product, x: f64, y: f64) -> ItemId {
        let id = new_item_id();
        let next = self.items.add(id.clone(), product, Point2D::new(x, y));
        self.replace(next);
        tracing::debug!(
            "Placed {} ({}) at ({x:.1}, {y:.1}) as {}",
            product.name,
            product.id,
            short_id(&id)
        );
        id
    }

    /// Remove an item; returns false if no such item exists
    pub fn remove(&mut self, id: &str) -> bool {
        let next = self.items.remove(id);
        let removed = self.replace(next);
        if removed {
            tracing::debug!("Removed item {}", short_id(id));
        }
        removed
    }

    /// Remove every item; returns how many were removed
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        if count > 0 {
            self.replace(ItemList::default());
            tracing::debug!("Cleared {count} items");
        }
        count
    }
}

/// Item ids are random v4 UUIDs, so rapid successive adds never collide
fn new_item_id() -> ItemId {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{product, sofa};

    #[test]
    fn test_add_sets_defaults() {
        let mut scene = SceneState::default();
        let id = scene.add(&sofa(), 100.0, 50.0);

        let item = scene.get_item(&id).unwrap();
        assert_eq!(item.product_id, "sofa");
        assert_eq!(item.position, Point2D::new(100.0, 50.0));
        assert_eq!(item.size, Size2D { width: 36.0, height: 40.0 });
        assert_eq!(item.rotation, 0);
        assert_eq!(item.z_index, 0);
        assert_eq!(item.scale, 1.0);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut scene = SceneState::default();
        let a = scene.add(&sofa(), 0.0, 0.0);
        let b = scene.add(&product("lamp", "Lamp", 30.0, 150.0, 30.0), 5.0, 5.0);

        let ids: Vec<&str> = scene.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), b.as_str()]);
        assert_eq!(scene.get_item(&b).unwrap().z_index, 1);
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut scene = SceneState::default();
        let ids: Vec<ItemId> = (0..200).map(|_| scene.add(&sofa(), 0.0, 0.0)).collect();
        let unique: std::collections::HashSet<&ItemId> = ids.iter().collect();
        assert_eq!(unique.len(), 200);
    }

    #[test]
    fn test_add_does_not_touch_previous_snapshot() {
        let mut scene = SceneState::default();
        scene.add(&sofa(), 0.0, 0.0);
        let before = scene.snapshot();
        scene.add(&sofa(), 1.0, 1.0);
        assert_eq!(before.len(), 1);
        assert_eq!(scene.item_count(), 2);
    }

    #[test]
    fn test_remove_absent_is_identity() {
        let mut scene = SceneState::default();
        scene.add(&sofa(), 0.0, 0.0);
        let before = scene.snapshot();
        let version = scene.version();

        assert!(!scene.remove("missing"));
        assert!(scene.items().ptr_eq(&before));
        assert_eq!(scene.items(), &before);
        assert_eq!(scene.version(), version);
    }

    #[test]
    fn test_remove_keeps_z_index_of_survivors() {
        let mut scene = SceneState::default();
        let a = scene.add(&sofa(), 0.0, 0.0);
        let b = scene.add(&sofa(), 0.0, 0.0);
        let c = scene.add(&sofa(), 0.0, 0.0);

        assert!(scene.remove(&a));
        assert_eq!(scene.get_item(&b).unwrap().z_index, 1);
        assert_eq!(scene.get_item(&c).unwrap().z_index, 2);
    }

    #[test]
    fn test_z_index_counts_items_present_at_append() {
        let mut scene = SceneState::default();
        let a = scene.add(&sofa(), 0.0, 0.0);
        scene.add(&sofa(), 0.0, 0.0);
        scene.remove(&a);

        let c = scene.add(&sofa(), 0.0, 0.0);
        assert_eq!(scene.get_item(&c).unwrap().z_index, 1);
    }

    #[test]
    fn test_remove_shares_untouched_items() {
        let mut scene = SceneState::default();
        let a = scene.add(&sofa(), 0.0, 0.0);
        let b = scene.add(&sofa(), 0.0, 0.0);
        let before = scene.snapshot();

        scene.remove(&a);
        assert!(scene.items().shares_item(&before, &b));
    }

    #[test]
    fn test_clear() {
        let mut scene = SceneState::default();
        scene.add(&sofa(), 0.0, 0.0);
        scene.add(&sofa(), 0.0, 0.0);
        assert_eq!(scene.clear(), 2);
        assert!(scene.items().is_empty());
        assert_eq!(scene.clear(), 0);
    }
}
