//! Factory functions for creating test data.
//!
//! Provides helpers to construct `Product`s, containers and populated canvases
//! used in tests and by the headless harness.

use shared::*;

use crate::canvas::SceneCanvas;
use crate::viewport::{ContainerRect, ScreenRect};

// ── Product factories ───────────────────────────────────────────

/// Create a product with the given catalog dimensions (cm).
pub fn product(id: &str, name: &str, width: f64, height: f64, depth: f64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("/images/{}.png", id),
        dimensions: Dimensions {
            width,
            height,
            depth,
        },
    }
}

/// 180 x 200 cm sofa, placed as 36 x 40.
pub fn sofa() -> Product {
    product("sofa", "Sofa", 180.0, 200.0, 90.0)
}

/// 40 x 40 cm floor lamp, placed as 8 x 8.
pub fn lamp() -> Product {
    product("lamp", "Floor lamp", 40.0, 40.0, 160.0)
}

/// 120 x 80 cm table, placed as 24 x 16.
pub fn table() -> Product {
    product("table", "Dining table", 120.0, 80.0, 75.0)
}

/// A product with a degenerate footprint.
pub fn flat_product() -> Product {
    product("poster", "Poster", 0.0, 0.0, 0.0)
}

// ── Containers ──────────────────────────────────────────────────

/// An 800 x 600 container at the screen origin.
pub fn container_at_origin() -> ContainerRect {
    ScreenRect::new(0.0, 0.0, 800.0, 600.0)
}

/// An 800 x 600 container offset like a canvas next to a side panel.
pub fn offset_container() -> ContainerRect {
    ScreenRect::new(240.0, 60.0, 800.0, 600.0)
}

// ── Canvases ────────────────────────────────────────────────────

/// An empty canvas laid out at the origin.
pub fn empty_canvas() -> SceneCanvas {
    let mut canvas = SceneCanvas::new();
    canvas.set_container(container_at_origin());
    canvas
}

/// A canvas holding a sofa, a lamp and a table, in that order.
pub fn furnished_canvas() -> (SceneCanvas, Vec<ItemId>) {
    let mut canvas = empty_canvas();
    let ids = vec![
        canvas.add(&sofa(), 100.0, 100.0),
        canvas.add(&lamp(), 300.0, 120.0),
        canvas.add(&table(), 200.0, 300.0),
    ];
    (canvas, ids)
}
