//! Rotate/scale operations on a single item

use std::sync::Arc;

use shared::{PlacedItem, RotateDirection, ScaleDirection};

use super::{short_id, ItemList, SceneState};

/// Degrees per rotation step
pub const ROTATION_STEP: i32 = 90;
pub const SCALE_STEP: f64 = 0.1;
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 2.0;

/// Rotation after one step, always in [0, 360)
pub fn rotate_degrees(rotation: i32, direction: RotateDirection) -> i32 {
    (rotation + direction.sign() * ROTATION_STEP).rem_euclid(360)
}

/// Scale after one step, saturating at the bounds.
///
/// Results are snapped to the 0.1 grid so repeated steps do not drift.
pub fn step_scale(scale: f64, direction: ScaleDirection) -> f64 {
    let next = ((scale + direction.sign() * SCALE_STEP) * 10.0).round() / 10.0;
    next.clamp(MIN_SCALE, MAX_SCALE)
}

impl ItemList {
    /// New list where item `id` is replaced by `f(item)`; the same list if
    /// `id` is absent or `f` leaves the item as it was. Every other item is
    /// shared with `self`.
    pub fn update(&self, id: &str, f: impl FnOnce(&PlacedItem) -> PlacedItem) -> ItemList {
        let Some(index) = self.0.iter().position(|item| item.id == id) else {
            return self.clone();
        };
        let next = f(&self.0[index]);
        if next == *self.0[index] {
            return self.clone();
        }
        let mut items: Vec<Arc<PlacedItem>> = self.0.iter().cloned().collect();
        items[index] = Arc::new(next);
        ItemList::from_shared(items)
    }

    pub fn rotate(&self, id: &str, direction: RotateDirection) -> ItemList {
        self.update(id, |item| PlacedItem {
            rotation: rotate_degrees(item.rotation, direction),
            ..item.clone()
        })
    }

    pub fn scale(&self, id: &str, direction: ScaleDirection) -> ItemList {
        self.update(id, |item| PlacedItem {
            scale: step_scale(item.scale, direction),
            ..item.clone()
        })
    }
}

impl SceneState {
    /// Rotate an item by one step; returns false if no such item exists
    pub fn rotate(&mut self, id: &str, direction: RotateDirection) -> bool {
        let next = self.items.rotate(id, direction);
        let changed = self.replace(next);
        if changed {
            tracing::debug!("Rotated {} {:?}", short_id(id), direction);
        }
        changed
    }

    /// Scale an item by one step; returns false if no such item exists
    pub fn scale(&mut self, id: &str, direction: ScaleDirection) -> bool {
        let next = self.items.scale(id, direction);
        let changed = self.replace(next);
        if changed {
            tracing::debug!("Scaled {} {:?}", short_id(id), direction);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sofa;

    #[test]
    fn test_rotate_left_from_zero_wraps() {
        assert_eq!(rotate_degrees(0, RotateDirection::Left), 270);
        assert_eq!(rotate_degrees(270, RotateDirection::Right), 0);
    }

    #[test]
    fn test_four_rights_close_the_circle() {
        let mut r = 90;
        for _ in 0..4 {
            r = rotate_degrees(r, RotateDirection::Right);
            assert!((0..360).contains(&r));
            assert_eq!(r % 90, 0);
        }
        assert_eq!(r, 90);
    }

    #[test]
    fn test_scale_saturates_up() {
        let mut s = 1.9;
        for _ in 0..5 {
            s = step_scale(s, ScaleDirection::Up);
        }
        assert_eq!(s, MAX_SCALE);
    }

    #[test]
    fn test_scale_saturates_down() {
        let mut s = 0.6;
        for _ in 0..5 {
            s = step_scale(s, ScaleDirection::Down);
        }
        assert_eq!(s, MIN_SCALE);
    }

    #[test]
    fn test_scale_steps_do_not_drift() {
        let mut s = 1.0;
        for _ in 0..3 {
            s = step_scale(s, ScaleDirection::Up);
        }
        assert_eq!(s, 1.3);
    }

    #[test]
    fn test_rotate_touches_only_target() {
        let mut scene = SceneState::default();
        let a = scene.add(&sofa(), 0.0, 0.0);
        let b = scene.add(&sofa(), 10.0, 0.0);
        let before = scene.snapshot();

        assert!(scene.rotate(&a, RotateDirection::Right));
        assert_eq!(scene.get_item(&a).unwrap().rotation, 90);
        assert_eq!(scene.get_item(&b).unwrap().rotation, 0);
        assert!(scene.items().shares_item(&before, &b));
        assert_eq!(before.get(&a).unwrap().rotation, 0);
    }

    #[test]
    fn test_scale_unknown_id_is_noop() {
        let mut scene = SceneState::default();
        scene.add(&sofa(), 0.0, 0.0);
        let before = scene.snapshot();
        let version = scene.version();

        assert!(!scene.scale("nope", ScaleDirection::Up));
        assert!(!scene.rotate("nope", RotateDirection::Left));
        assert!(scene.items().ptr_eq(&before));
        assert_eq!(scene.version(), version);
    }

    #[test]
    fn test_scale_at_bound_leaves_scene_untouched() {
        let mut scene = SceneState::default();
        let a = scene.add(&sofa(), 0.0, 0.0);
        for _ in 0..10 {
            assert!(scene.scale(&a, ScaleDirection::Up));
        }
        assert_eq!(scene.get_item(&a).unwrap().scale, MAX_SCALE);

        let version = scene.version();
        assert!(!scene.scale(&a, ScaleDirection::Up));
        assert_eq!(scene.version(), version);
    }
}
