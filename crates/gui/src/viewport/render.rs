//! Render model: what a host needs to paint one frame of the canvas.

use serde::Serialize;
use shared::{ItemId, LightMode, PlacedItem, Point2D};

use super::coords::{scene_to_screen, ContainerRect, ScreenRect};
use crate::state::ItemList;

/// One item, ready to paint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: ItemId,
    pub name: String,
    pub image: String,
    pub rotation: i32,
    pub z_index: i32,
    pub scale: f64,
    /// Painted bounds in screen space, after zoom, rotation and item scale
    pub rect: ScreenRect,
    /// Rotate/scale/remove toolbar shown for this item
    pub toolbar_visible: bool,
}

/// Everything needed to paint the canvas once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub zoom: f64,
    pub light_mode: LightMode,
    /// 1.0 by day, the configured night factor at night
    pub brightness: f32,
    pub container: ContainerRect,
    /// Items in paint order (back to front)
    pub items: Vec<RenderItem>,
}

impl RenderFrame {
    pub fn build(
        items: &ItemList,
        selected: Option<&str>,
        container: ContainerRect,
        zoom: f64,
        light_mode: LightMode,
        brightness: f32,
    ) -> Self {
        let mut ordered: Vec<&PlacedItem> = items.iter().collect();
        // Stable: equal z-indices keep append order
        ordered.sort_by_key(|item| item.z_index);

        let items = ordered
            .into_iter()
            .map(|item| RenderItem {
                id: item.id.clone(),
                name: item.name.clone(),
                image: item.image.clone(),
                rotation: item.rotation,
                z_index: item.z_index,
                scale: item.scale,
                rect: item_screen_rect(item, &container, zoom),
                toolbar_visible: selected == Some(item.id.as_str()),
            })
            .collect();

        Self {
            zoom,
            light_mode,
            brightness,
            container,
            items,
        }
    }

    /// Topmost item under a screen point
    pub fn item_at(&self, screen: Point2D) -> Option<&RenderItem> {
        self.items.iter().rev().find(|item| item.rect.contains(screen))
    }

    /// The item whose toolbar is showing, if any
    pub fn toolbar_item(&self) -> Option<&RenderItem> {
        self.items.iter().find(|item| item.toolbar_visible)
    }
}

/// Screen bounds of an item. Rotation is a multiple of 90, so the painted
/// shape stays axis-aligned; quarter turns swap width and height about the
/// layout box center, and the item scale applies about the same center.
pub fn item_screen_rect(item: &PlacedItem, container: &ContainerRect, zoom: f64) -> ScreenRect {
    let origin = scene_to_screen(item.position, container, zoom);
    let layout = ScreenRect::new(
        origin.x,
        origin.y,
        item.size.width * zoom,
        item.size.height * zoom,
    );
    let (width, height) = if item.rotation % 180 == 0 {
        (layout.width, layout.height)
    } else {
        (layout.height, layout.width)
    };
    let c = layout.center();
    let width = width * item.scale;
    let height = height * item.scale;
    ScreenRect::new(c.x - width / 2.0, c.y - height / 2.0, width, height)
}
