use shared::{DragKind, Point2D, Product};

use super::DragPayload;
use crate::viewport::coords::{screen_to_scene, ContainerRect};

/// A drop that landed inside the canvas, in scene coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct DropPlacement {
    pub product: Product,
    pub scene_x: f64,
    pub scene_y: f64,
}

/// Turn a drag release into a placement, or `None` to discard it.
///
/// Discarded: no pointer offset, a payload that is not a product, or an offset
/// outside the container. The container is the visual rect of the zoomed
/// scene layer, so dividing by `zoom` puts the item under the cursor at any
/// zoom level.
pub fn resolve_drop(
    payload: &DragPayload,
    client_offset: Option<Point2D>,
    container: &ContainerRect,
    zoom: f64,
) -> Option<DropPlacement> {
    if payload.kind != DragKind::Product {
        return None;
    }
    let offset = client_offset?;
    if !container.contains(offset) {
        return None;
    }
    let scene = screen_to_scene(offset, container, zoom);
    Some(DropPlacement {
        product: payload.product.clone(),
        scene_x: scene.x,
        scene_y: scene.y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{container_at_origin, sofa};
    use crate::viewport::ScreenRect;

    fn payload() -> DragPayload {
        DragPayload::product(sofa())
    }

    #[test]
    fn test_missing_offset_is_discarded() {
        assert!(resolve_drop(&payload(), None, &container_at_origin(), 1.0).is_none());
    }

    #[test]
    fn test_outside_container_is_discarded() {
        let container = ScreenRect::new(100.0, 100.0, 200.0, 200.0);
        let outside = [
            Point2D::new(99.0, 150.0),
            Point2D::new(301.0, 150.0),
            Point2D::new(150.0, 99.0),
            Point2D::new(150.0, 301.0),
        ];
        for p in outside {
            assert!(resolve_drop(&payload(), Some(p), &container, 1.0).is_none());
        }
    }

    #[test]
    fn test_unit_zoom() {
        let placement =
            resolve_drop(&payload(), Some(Point2D::new(100.0, 50.0)), &container_at_origin(), 1.0)
                .unwrap();
        assert_eq!((placement.scene_x, placement.scene_y), (100.0, 50.0));
        assert_eq!(placement.product.id, "sofa");
    }

    #[test]
    fn test_zoom_is_unapplied() {
        let placement =
            resolve_drop(&payload(), Some(Point2D::new(100.0, 50.0)), &container_at_origin(), 2.0)
                .unwrap();
        assert_eq!((placement.scene_x, placement.scene_y), (50.0, 25.0));
    }

    #[test]
    fn test_container_offset_is_subtracted() {
        let container = ScreenRect::new(40.0, 30.0, 500.0, 500.0);
        let placement =
            resolve_drop(&payload(), Some(Point2D::new(140.0, 80.0)), &container, 0.5).unwrap();
        assert_eq!((placement.scene_x, placement.scene_y), (200.0, 100.0));
    }
}
