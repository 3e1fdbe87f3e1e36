//! Scene canvas: the single owner of the scene.
//!
//! Items, selection, zoom and lighting live here. Everything else gets a
//! snapshot (`SceneSnapshot`, `RenderFrame`) and asks for changes with a
//! `CanvasCommand`; commands are applied one at a time in arrival order.

use serde::Serialize;
use shared::{ItemId, LightMode, Point2D, Product, RotateDirection, SavedItem, ScaleDirection};

use crate::dnd::{resolve_drop, DragPayload, DropHandler};
use crate::export::design_records;
use crate::state::{short_id, ItemList, SceneState, SelectionState, ViewState};
use crate::state::view::NIGHT_BRIGHTNESS;
use crate::viewport::{ContainerRect, FullscreenHost, RenderFrame, ScreenRect};

/// A mutation request for the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    /// Place a product at scene coordinates
    Add { product: Product, x: f64, y: f64 },
    Remove(ItemId),
    Rotate(ItemId, RotateDirection),
    Scale(ItemId, ScaleDirection),
    /// Pointer pressed on an item
    ClickItem(ItemId),
    /// Pointer pressed on empty canvas
    ClickEmpty,
    /// Remove every item
    Clear,
    ZoomIn,
    ZoomOut,
    ToggleLight,
}

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A new item was placed
    Placed(ItemId),
    /// State changed
    Applied,
    /// Nothing to do (unknown id, bound reached, already in that state)
    Ignored,
}

impl CommandOutcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            CommandOutcome::Applied
        } else {
            CommandOutcome::Ignored
        }
    }
}

/// Read-only view of the whole scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub zoom_level: f64,
    pub light_mode: LightMode,
    #[serde(serialize_with = "serialize_items")]
    pub items: ItemList,
    pub selection: Option<ItemId>,
}

fn serialize_items<S: serde::Serializer>(items: &ItemList, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(items.iter())
}

pub struct SceneCanvas {
    scene: SceneState,
    selection: SelectionState,
    view: ViewState,
    /// Visual bounds of the zoomed scene layer
    container: ContainerRect,
    /// Unscaled bounds of the canvas root; the zoomed layer is clipped to it
    bounds: Option<ScreenRect>,
    night_brightness: f32,
    /// Product currently being dragged towards the canvas
    incoming: Option<Product>,
}

impl Default for SceneCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCanvas {
    pub fn new() -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            view: ViewState::default(),
            container: ContainerRect::default(),
            bounds: None,
            night_brightness: NIGHT_BRIGHTNESS,
            incoming: None,
        }
    }

    pub fn with_night_brightness(mut self, brightness: f32) -> Self {
        self.night_brightness = brightness.clamp(0.0, 1.0);
        self
    }

    pub fn set_night_brightness(&mut self, brightness: f32) {
        self.night_brightness = brightness.clamp(0.0, 1.0);
    }

    // ── Layout ────────────────────────────────────────────────

    /// Set the visual bounds of the scene layer as measured by the host
    pub fn set_container(&mut self, container: ContainerRect) {
        self.container = container;
    }

    /// Set the unscaled bounds of the canvas root. Drops released outside
    /// them are discarded even where the zoomed layer extends past the root.
    pub fn set_bounds(&mut self, bounds: ScreenRect) {
        self.bounds = Some(bounds);
    }

    /// Derive the scene layer bounds from the unscaled canvas bounds, for
    /// hosts that do not measure the scaled layer themselves
    pub fn fit_to(&mut self, canvas_bounds: ScreenRect) {
        self.bounds = Some(canvas_bounds);
        self.container = canvas_bounds.scaled_about_center(self.view.zoom());
    }

    pub fn container(&self) -> ContainerRect {
        self.container
    }

    pub fn bounds(&self) -> Option<ScreenRect> {
        self.bounds
    }

    fn within_bounds(&self, offset: Option<Point2D>) -> bool {
        match (self.bounds, offset) {
            (Some(bounds), Some(p)) => bounds.contains(p),
            _ => true,
        }
    }

    // ── Commands ──────────────────────────────────────────────

    pub fn apply(&mut self, command: CanvasCommand) -> CommandOutcome {
        tracing::debug!("Canvas command: {:?}", command);
        match command {
            CanvasCommand::Add { product, x, y } => {
                CommandOutcome::Placed(self.scene.add(&product, x, y))
            }
            CanvasCommand::Remove(id) => CommandOutcome::from_changed(self.remove(&id)),
            CanvasCommand::Rotate(id, direction) => {
                CommandOutcome::from_changed(self.scene.rotate(&id, direction))
            }
            CanvasCommand::Scale(id, direction) => {
                CommandOutcome::from_changed(self.scene.scale(&id, direction))
            }
            CanvasCommand::ClickItem(id) => CommandOutcome::from_changed(self.select(&id)),
            CanvasCommand::ClickEmpty => {
                let changed = self.selection.primary().is_some();
                self.selection.clear();
                CommandOutcome::from_changed(changed)
            }
            CanvasCommand::Clear => {
                self.selection.clear();
                CommandOutcome::from_changed(self.scene.clear() > 0)
            }
            CanvasCommand::ZoomIn => CommandOutcome::from_changed(self.view.zoom_in()),
            CanvasCommand::ZoomOut => CommandOutcome::from_changed(self.view.zoom_out()),
            CanvasCommand::ToggleLight => {
                let mode = self.view.toggle_light();
                tracing::debug!("Light mode: {:?}", mode);
                CommandOutcome::Applied
            }
        }
    }

    /// Place a product at scene coordinates
    pub fn add(&mut self, product: &Product, x: f64, y: f64) -> ItemId {
        self.scene.add(product, x, y)
    }

    /// Remove an item, clearing the selection if it pointed at it
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.scene.remove(id);
        if removed && self.selection.on_item_removed(id) {
            tracing::debug!("Selection cleared with removed item {}", short_id(id));
        }
        removed
    }

    /// Select an item; ids not in the scene are ignored
    pub fn select(&mut self, id: &str) -> bool {
        if !self.scene.items().contains(id) || self.selection.is_selected(id) {
            return false;
        }
        self.selection.select(id.to_string());
        true
    }

    /// Remove the selected item, if any
    pub fn remove_selected(&mut self) -> bool {
        match self.selection.primary().cloned() {
            Some(id) => self.remove(&id),
            None => false,
        }
    }

    // ── Fullscreen ────────────────────────────────────────────

    /// Enter or leave fullscreen depending on the host's live state.
    /// A refused request is logged and otherwise ignored.
    pub fn toggle_fullscreen(&self, host: &mut dyn FullscreenHost) {
        let result = if host.is_fullscreen() {
            host.exit_fullscreen()
        } else {
            host.request_fullscreen()
        };
        if let Err(e) = result {
            tracing::warn!("{e}");
        }
    }

    // ── Snapshots ─────────────────────────────────────────────

    pub fn items(&self) -> &ItemList {
        self.scene.items()
    }

    pub fn selection(&self) -> Option<&ItemId> {
        self.selection.primary()
    }

    pub fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn light_mode(&self) -> LightMode {
        self.view.light_mode()
    }

    /// Scene version, bumped by every item change
    pub fn version(&self) -> u64 {
        self.scene.version()
    }

    /// Product currently dragged towards the canvas, if any
    pub fn incoming(&self) -> Option<&Product> {
        self.incoming.as_ref()
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            zoom_level: self.view.zoom(),
            light_mode: self.view.light_mode(),
            items: self.scene.snapshot(),
            selection: self.selection.primary().cloned(),
        }
    }

    pub fn render(&self) -> RenderFrame {
        RenderFrame::build(
            self.scene.items(),
            self.selection.primary().map(String::as_str),
            self.container,
            self.view.zoom(),
            self.view.light_mode(),
            self.view.brightness(self.night_brightness),
        )
    }

    /// Flat records for "save design"
    pub fn save_design(&self) -> Vec<SavedItem> {
        design_records(self.scene.items())
    }
}

impl DropHandler for SceneCanvas {
    fn on_drag_start(&mut self, payload: &DragPayload) {
        self.incoming = Some(payload.product.clone());
    }

    fn on_drop(&mut self, payload: &DragPayload, client_offset: Option<Point2D>) -> Option<ItemId> {
        self.incoming = None;
        let placement = if self.within_bounds(client_offset) {
            resolve_drop(payload, client_offset, &self.container, self.view.zoom())
        } else {
            None
        };
        let Some(placement) = placement else {
            tracing::debug!("Discarded drop of {}", payload.product.id);
            return None;
        };
        Some(
            self.scene
                .add(&placement.product, placement.scene_x, placement.scene_y),
        )
    }
}
