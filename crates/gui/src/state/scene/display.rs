//! Display helper functions for placed items

use shared::PlacedItem;

/// Get display name for an item
pub fn item_display_name(item: &PlacedItem) -> String {
    format!("{} ({})", item.name, short_id(&item.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("диван-длинный"), "диван-дл");
    }
}
