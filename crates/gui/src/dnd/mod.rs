//! Drag and drop of catalog products onto the canvas.
//!
//! Input backends (egui's drag-and-drop API, browser pointer events, the test
//! harness) only talk to the `DropHandler` capability, so placement logic
//! does not know which one is driving it.

mod drop_target;
mod source;

pub use drop_target::{resolve_drop, DropPlacement};
pub use source::DragSource;

use serde::{Deserialize, Serialize};
use shared::{DragKind, ItemId, Point2D, Product};

/// What travels from a drag source to a drop target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub kind: DragKind,
    pub product: Product,
}

impl DragPayload {
    pub fn product(product: Product) -> Self {
        Self {
            kind: DragKind::Product,
            product,
        }
    }
}

/// Minimal drag-and-drop capability a backend drives
pub trait DropHandler {
    /// A drag left a source
    fn on_drag_start(&mut self, payload: &DragPayload);

    /// A drag was released. `client_offset` is `None` when the backend lost
    /// track of the pointer. Returns the id of the placed item, if any.
    fn on_drop(&mut self, payload: &DragPayload, client_offset: Option<Point2D>) -> Option<ItemId>;
}
