//! Placed item store
//!
//! The store owns the ordered item sequence. Every mutation builds a new
//! `ItemList` that shares the untouched items with the previous one, so
//! snapshots handed out earlier never change underneath their holders.

mod display;
mod item_ops;
mod transform_ops;

use std::sync::Arc;

pub use display::{item_display_name, short_id};
pub use item_ops::SIZE_DIVISOR;
pub use transform_ops::{
    rotate_degrees, step_scale, MAX_SCALE, MIN_SCALE, ROTATION_STEP, SCALE_STEP,
};

use shared::PlacedItem;

/// Immutable, cheaply clonable sequence of placed items in append order
#[derive(Debug, Clone, Default)]
pub struct ItemList(Arc<Vec<Arc<PlacedItem>>>);

impl ItemList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in append order
    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> + '_ {
        self.0.iter().map(|item| item.as_ref())
    }

    pub fn get(&self, id: &str) -> Option<&PlacedItem> {
        self.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// True if both lists are the very same allocation
    pub fn ptr_eq(&self, other: &ItemList) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True if both lists hold the same allocation for item `id`
    pub fn shares_item(&self, other: &ItemList, id: &str) -> bool {
        let find = |list: &ItemList| list.0.iter().find(|item| item.id == id).cloned();
        match (find(self), find(other)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a, &b),
            _ => false,
        }
    }

    pub fn to_vec(&self) -> Vec<PlacedItem> {
        self.iter().cloned().collect()
    }

    fn from_shared(items: Vec<Arc<PlacedItem>>) -> Self {
        Self(Arc::new(items))
    }
}

impl PartialEq for ItemList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

/// Scene item store with a mutation counter
#[derive(Default)]
pub struct SceneState {
    items: ItemList,
    /// Monotonically increasing version counter for redraw/autosave checks
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every effective mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Borrow the current item sequence
    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// Read-only snapshot for renderers and other components
    pub fn snapshot(&self) -> ItemList {
        self.items.clone()
    }

    pub fn get_item(&self, id: &str) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Swap in a new sequence; bumps the version only if something changed
    fn replace(&mut self, next: ItemList) -> bool {
        if next.ptr_eq(&self.items) {
            return false;
        }
        self.items = next;
        self.version += 1;
        true
    }
}
