//! "Save design" export: the placed items as flat records.

use shared::SavedItem;

use crate::error::{EditorError, EditorResult};
use crate::state::ItemList;

/// Flat records in sequence order
pub fn design_records(items: &ItemList) -> Vec<SavedItem> {
    items.iter().map(SavedItem::from).collect()
}

/// Design as a JSON array of camelCase records
pub fn design_json(items: &ItemList) -> EditorResult<String> {
    serde_json::to_string_pretty(&design_records(items)).map_err(EditorError::Export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{lamp, sofa};
    use shared::{Point2D, RotateDirection};

    #[test]
    fn test_empty_design() {
        assert!(design_records(&ItemList::default()).is_empty());
        assert_eq!(design_json(&ItemList::default()).unwrap(), "[]");
    }

    #[test]
    fn test_records_follow_sequence_order() {
        let items = ItemList::default()
            .add("a".into(), &sofa(), Point2D::new(100.0, 50.0))
            .add("b".into(), &lamp(), Point2D::new(10.0, 20.0))
            .rotate("a", RotateDirection::Left);
        let records = design_records(&items);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[0].rotation, 270);
        assert_eq!(records[0].width, 36.0);
        assert_eq!(records[1].z_index, 1);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let items = ItemList::default().add("a".into(), &sofa(), Point2D::new(1.0, 2.0));
        let json: serde_json::Value = serde_json::from_str(&design_json(&items).unwrap()).unwrap();
        let record = &json[0];
        assert_eq!(record["productId"], "sofa");
        assert_eq!(record["zIndex"], 0);
        assert_eq!(record["x"], 1.0);
        assert_eq!(record["height"], 40.0);
        assert!(record.get("product_id").is_none());
    }
}
