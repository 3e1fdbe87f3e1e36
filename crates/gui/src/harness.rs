//! Headless test harness for programmatic scene manipulation.
//!
//! Drives a `SceneCanvas` the way a pointer would: drags leave a
//! `DragSource`, drops land at screen points, clicks are hit-tested against
//! the current render frame.

use shared::{ItemId, PlacedItem, Point2D, Product, RotateDirection, ScaleDirection};

use crate::canvas::{CanvasCommand, SceneCanvas};
use crate::command::{execute_json, CommandResponse};
use crate::dnd::{DragSource, DropHandler};
use crate::error::EditorResult;
use crate::export::design_json;
use crate::fixtures::container_at_origin;
use crate::viewport::{ContainerRect, FullscreenHost, HeadlessFullscreen, RenderFrame};

/// Headless test harness: manages the canvas and a fake fullscreen runtime
pub struct TestHarness {
    pub canvas: SceneCanvas,
    pub fullscreen: HeadlessFullscreen,
}

impl TestHarness {
    /// Create a new empty harness with an 800 x 600 container at the origin.
    pub fn new() -> Self {
        Self::with_container(container_at_origin())
    }

    pub fn with_container(container: ContainerRect) -> Self {
        let mut canvas = SceneCanvas::new();
        canvas.set_container(container);
        Self {
            canvas,
            fullscreen: HeadlessFullscreen::new(),
        }
    }

    // ── Drag and drop ─────────────────────────────────────────

    /// Drag a product from a catalog source and release it at a screen point
    pub fn drag_and_drop(&mut self, product: &Product, screen: Point2D) -> Option<ItemId> {
        self.release_drag(product, Some(screen))
    }

    /// Drag a product and release it where the backend lost the pointer
    pub fn drag_and_lose_pointer(&mut self, product: &Product) -> Option<ItemId> {
        self.release_drag(product, None)
    }

    fn release_drag(&mut self, product: &Product, offset: Option<Point2D>) -> Option<ItemId> {
        let mut source = DragSource::new(product.clone());
        let payload = source.begin_drag();
        self.canvas.on_drag_start(&payload);
        let placed = self.canvas.on_drop(&payload, offset);
        source.end_drag();
        placed
    }

    /// Place a product directly at scene coordinates
    pub fn place(&mut self, product: &Product, x: f64, y: f64) -> ItemId {
        self.canvas.add(product, x, y)
    }

    // ── Pointer ───────────────────────────────────────────────

    /// Press the pointer at a screen point: selects the topmost item there,
    /// or clears the selection on empty canvas
    pub fn click(&mut self, screen: Point2D) {
        let hit = self.frame().item_at(screen).map(|item| item.id.clone());
        match hit {
            Some(id) => self.canvas.apply(CanvasCommand::ClickItem(id)),
            None => self.canvas.apply(CanvasCommand::ClickEmpty),
        };
    }

    /// Click the center of an item's painted rect
    pub fn click_item(&mut self, id: &str) {
        if let Some(item) = self.frame().items.iter().find(|item| item.id == id) {
            let center = item.rect.center();
            self.click(center);
        }
    }

    // ── Item toolbar ──────────────────────────────────────────

    pub fn rotate(&mut self, id: &str, direction: RotateDirection) {
        self.canvas.apply(CanvasCommand::Rotate(id.to_string(), direction));
    }

    pub fn scale(&mut self, id: &str, direction: ScaleDirection) {
        self.canvas.apply(CanvasCommand::Scale(id.to_string(), direction));
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.canvas.remove(id)
    }

    // ── Canvas toolbar ────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.canvas.apply(CanvasCommand::ZoomIn);
    }

    pub fn zoom_out(&mut self) {
        self.canvas.apply(CanvasCommand::ZoomOut);
    }

    pub fn toggle_light(&mut self) {
        self.canvas.apply(CanvasCommand::ToggleLight);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.canvas.toggle_fullscreen(&mut self.fullscreen);
    }

    /// Fullscreen status as the toolbar label would read it
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn frame(&self) -> RenderFrame {
        self.canvas.render()
    }

    pub fn item(&self, id: &str) -> Option<&PlacedItem> {
        self.canvas.items().get(id)
    }

    pub fn item_count(&self) -> usize {
        self.canvas.items().len()
    }

    pub fn selected(&self) -> Option<&ItemId> {
        self.canvas.selection()
    }

    /// Ids whose toolbar is showing
    pub fn toolbar_ids(&self) -> Vec<ItemId> {
        self.frame()
            .items
            .into_iter()
            .filter(|item| item.toolbar_visible)
            .map(|item| item.id)
            .collect()
    }

    pub fn save_design_json(&self) -> EditorResult<String> {
        design_json(self.canvas.items())
    }

    /// Run one JSON command against the canvas
    pub fn run_json(&mut self, json: &str) -> EditorResult<CommandResponse> {
        execute_json(&mut self.canvas, json)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{lamp, sofa};

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.item_count(), 0);
        assert!(h.selected().is_none());
        assert!(!h.is_fullscreen());
    }

    #[test]
    fn test_drag_and_drop() {
        let mut h = TestHarness::new();
        let id = h.drag_and_drop(&sofa(), Point2D::new(100.0, 50.0)).unwrap();
        assert_eq!(h.item(&id).unwrap().position, Point2D::new(100.0, 50.0));
        assert!(h.canvas.incoming().is_none());
    }

    #[test]
    fn test_lost_pointer_places_nothing() {
        let mut h = TestHarness::new();
        assert!(h.drag_and_lose_pointer(&sofa()).is_none());
        assert_eq!(h.item_count(), 0);
    }

    #[test]
    fn test_click_hits_topmost() {
        let mut h = TestHarness::new();
        h.place(&sofa(), 0.0, 0.0);
        let lamp_id = h.place(&lamp(), 10.0, 10.0);
        h.click(Point2D::new(12.0, 12.0));
        assert_eq!(h.selected(), Some(&lamp_id));
        h.click(Point2D::new(700.0, 500.0));
        assert!(h.selected().is_none());
    }

    #[test]
    fn test_click_item_shows_its_toolbar() {
        let mut h = TestHarness::new();
        let a = h.place(&sofa(), 0.0, 0.0);
        h.place(&lamp(), 200.0, 200.0);
        h.click_item(&a);
        assert_eq!(h.toolbar_ids(), vec![a]);
    }

    #[test]
    fn test_run_json() {
        let mut h = TestHarness::new();
        let resp = h.run_json(r#"{"command": "toggle_light"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(h.frame().brightness, 0.7);
    }
}
