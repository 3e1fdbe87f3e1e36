use shared::ItemId;

/// Single-item selection state.
///
/// `Unselected` is `None`, `Selected(id)` is `Some(id)`. Whether `id` exists in
/// the scene is checked by the canvas before calling `select`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ItemId>,
}

impl SelectionState {
    /// Currently selected item
    pub fn primary(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// Check if an item is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select an item (replaces previous selection)
    pub fn select(&mut self, id: ItemId) {
        self.selected = Some(id);
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if it points at the removed item.
    /// Returns true if the selection was cleared.
    pub fn on_item_removed(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }

    /// Number of selected items (0 or 1)
    pub fn count(&self) -> usize {
        usize::from(self.selected.is_some())
    }
}
