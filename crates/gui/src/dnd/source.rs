use shared::Product;

use super::DragPayload;

const DRAGGING_OPACITY: f32 = 0.5;

/// Catalog product wrapped as a drag source.
///
/// Holds its own copy of the product and only reports whether it is being
/// dragged, for opacity feedback on the source element.
#[derive(Debug, Clone)]
pub struct DragSource {
    product: Product,
    dragging: bool,
}

impl DragSource {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            dragging: false,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Payload handed to the backend when a drag starts
    pub fn payload(&self) -> DragPayload {
        DragPayload::product(self.product.clone())
    }

    /// Mark the drag as started and return its payload
    pub fn begin_drag(&mut self) -> DragPayload {
        self.dragging = true;
        self.payload()
    }

    /// Drag released or cancelled, wherever it landed
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Sync with a backend that tracks drag state itself
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn opacity(&self) -> f32 {
        if self.dragging {
            DRAGGING_OPACITY
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sofa;
    use shared::DragKind;

    #[test]
    fn test_payload_is_tagged_product() {
        let source = DragSource::new(sofa());
        let payload = source.payload();
        assert_eq!(payload.kind, DragKind::Product);
        assert_eq!(payload.product, sofa());
    }

    #[test]
    fn test_drag_flag_drives_opacity() {
        let mut source = DragSource::new(sofa());
        assert!(!source.is_dragging());
        assert_eq!(source.opacity(), 1.0);

        source.begin_drag();
        assert!(source.is_dragging());
        assert_eq!(source.opacity(), 0.5);

        source.end_drag();
        assert!(!source.is_dragging());
        assert_eq!(source.product(), &sofa());
    }

    #[test]
    fn test_payload_serializes_kind() {
        let json = serde_json::to_value(DragSource::new(sofa()).payload()).unwrap();
        assert_eq!(json["kind"], "product");
    }
}
