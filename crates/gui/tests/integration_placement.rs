//! Integration tests for placement, manipulation and selection.
//!
//! Drives the canvas through the headless harness the way pointer input would.

use room_editor_lib::fixtures::{flat_product, lamp, offset_container, sofa, table};
use room_editor_lib::harness::TestHarness;
use shared::{LightMode, Point2D, RotateDirection, ScaleDirection};

const EPS: f64 = 1e-9;

#[test]
fn test_drop_at_unit_zoom() {
    let mut h = TestHarness::new();
    let id = h.drag_and_drop(&sofa(), Point2D::new(100.0, 50.0)).unwrap();

    let item = h.item(&id).unwrap();
    assert_eq!(item.position, Point2D::new(100.0, 50.0));
    assert_eq!((item.size.width, item.size.height), (36.0, 40.0));
    assert_eq!(item.rotation, 0);
    assert_eq!(item.z_index, 0);
    assert_eq!(item.scale, 1.0);
    assert_eq!(item.product_id, "sofa");
    assert_eq!(item.name, "Sofa");
}

#[test]
fn test_drop_position_is_zoom_invariant() {
    let mut h = TestHarness::new();
    for _ in 0..10 {
        h.zoom_in();
    }
    assert!((h.canvas.zoom() - 2.0).abs() < EPS);

    let id = h.drag_and_drop(&sofa(), Point2D::new(100.0, 50.0)).unwrap();
    let item = h.item(&id).unwrap();
    assert!((item.position.x - 50.0).abs() < EPS);
    assert!((item.position.y - 25.0).abs() < EPS);
}

#[test]
fn test_dropped_item_paints_under_cursor() {
    let mut h = TestHarness::with_container(offset_container());
    h.zoom_out();
    h.zoom_out();
    let cursor = Point2D::new(500.0, 300.0);
    let id = h.drag_and_drop(&table(), cursor).unwrap();

    let frame = h.frame();
    let painted = frame.items.iter().find(|i| i.id == id).unwrap();
    assert!((painted.rect.left - cursor.x).abs() < EPS);
    assert!((painted.rect.top - cursor.y).abs() < EPS);
}

#[test]
fn test_drop_outside_container_is_discarded() {
    let mut h = TestHarness::with_container(offset_container());
    assert!(h.drag_and_drop(&sofa(), Point2D::new(100.0, 100.0)).is_none());
    assert!(h.drag_and_lose_pointer(&sofa()).is_none());
    assert_eq!(h.item_count(), 0);
    assert_eq!(h.canvas.version(), 0);
}

#[test]
fn test_zero_footprint_product_still_places() {
    let mut h = TestHarness::new();
    let id = h.drag_and_drop(&flat_product(), Point2D::new(10.0, 10.0)).unwrap();
    let item = h.item(&id).unwrap();
    assert_eq!((item.size.width, item.size.height), (0.0, 0.0));
}

#[test]
fn test_same_product_twice_gets_distinct_ids() {
    let mut h = TestHarness::new();
    let a = h.drag_and_drop(&lamp(), Point2D::new(10.0, 10.0)).unwrap();
    let b = h.drag_and_drop(&lamp(), Point2D::new(10.0, 10.0)).unwrap();
    assert_ne!(a, b);
    assert_eq!(h.item_count(), 2);
}

#[test]
fn test_remove_absent_id_is_idempotent() {
    let mut h = TestHarness::new();
    h.place(&sofa(), 0.0, 0.0);
    let before = h.canvas.snapshot();

    assert!(!h.remove("missing"));
    assert!(!h.remove("missing"));
    assert!(h.canvas.items().ptr_eq(&before.items));
}

#[test]
fn test_rotation_closure() {
    let mut h = TestHarness::new();
    let id = h.place(&sofa(), 0.0, 0.0);

    h.rotate(&id, RotateDirection::Left);
    assert_eq!(h.item(&id).unwrap().rotation, 270);

    for _ in 0..4 {
        h.rotate(&id, RotateDirection::Right);
    }
    assert_eq!(h.item(&id).unwrap().rotation, 270);
}

#[test]
fn test_saturating_scale() {
    let mut h = TestHarness::new();
    let id = h.place(&sofa(), 0.0, 0.0);

    for _ in 0..9 {
        h.scale(&id, ScaleDirection::Up);
    }
    assert!((h.item(&id).unwrap().scale - 1.9).abs() < EPS);
    h.scale(&id, ScaleDirection::Up);
    h.scale(&id, ScaleDirection::Up);
    assert_eq!(h.item(&id).unwrap().scale, 2.0);

    for _ in 0..14 {
        h.scale(&id, ScaleDirection::Down);
    }
    assert!((h.item(&id).unwrap().scale - 0.6).abs() < EPS);
    h.scale(&id, ScaleDirection::Down);
    h.scale(&id, ScaleDirection::Down);
    assert_eq!(h.item(&id).unwrap().scale, 0.5);
}

#[test]
fn test_z_index_after_earlier_removal() {
    let mut h = TestHarness::new();
    let a = h.place(&sofa(), 0.0, 0.0);
    let b = h.place(&lamp(), 0.0, 0.0);
    h.remove(&a);
    let c = h.place(&table(), 0.0, 0.0);

    assert_eq!(h.item(&b).unwrap().z_index, 1);
    assert_eq!(h.item(&c).unwrap().z_index, 1);

    let order: Vec<String> = h.frame().items.into_iter().map(|i| i.id).collect();
    assert_eq!(order, vec![b, c]);
}

#[test]
fn test_removing_selected_item_clears_selection() {
    let mut h = TestHarness::new();
    let a = h.place(&sofa(), 0.0, 0.0);
    let b = h.place(&lamp(), 100.0, 100.0);

    h.click_item(&a);
    h.remove(&b);
    assert_eq!(h.selected(), Some(&a));

    h.remove(&a);
    assert!(h.selected().is_none());
    assert!(h.toolbar_ids().is_empty());
}

#[test]
fn test_toolbar_is_exclusive() {
    let mut h = TestHarness::new();
    let ids = [
        h.place(&sofa(), 0.0, 0.0),
        h.place(&lamp(), 100.0, 0.0),
        h.place(&table(), 200.0, 0.0),
    ];
    assert!(h.toolbar_ids().is_empty());

    for id in &ids {
        h.click_item(id);
        assert_eq!(h.toolbar_ids(), vec![id.clone()]);
    }

    h.click(Point2D::new(700.0, 500.0));
    assert!(h.toolbar_ids().is_empty());
}

#[test]
fn test_zoom_bounds() {
    let mut h = TestHarness::new();
    for _ in 0..30 {
        h.zoom_in();
    }
    assert_eq!(h.canvas.zoom(), 2.0);
    for _ in 0..30 {
        h.zoom_out();
    }
    assert_eq!(h.canvas.zoom(), 0.5);
    assert_eq!(h.canvas.view().zoom_percent(), 50);
}

#[test]
fn test_night_mode_dims_without_touching_items() {
    let mut h = TestHarness::new();
    let id = h.place(&sofa(), 0.0, 0.0);
    let version = h.canvas.version();

    h.toggle_light();
    let frame = h.frame();
    assert_eq!(frame.light_mode, LightMode::Night);
    assert!(frame.brightness < 1.0);
    assert_eq!(h.canvas.version(), version);
    assert!(h.item(&id).is_some());

    h.toggle_light();
    assert_eq!(h.frame().brightness, 1.0);
}

#[test]
fn test_quarter_turn_keeps_center() {
    let mut h = TestHarness::new();
    let id = h.place(&sofa(), 100.0, 100.0);
    let before = h.frame().items[0].rect.center();
    h.rotate(&id, RotateDirection::Right);
    let rect = h.frame().items[0].rect;
    assert_eq!(rect.center(), before);
    assert_eq!((rect.width, rect.height), (40.0, 36.0));
}
