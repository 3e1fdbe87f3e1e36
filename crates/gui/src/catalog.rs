//! Product catalog input.
//!
//! The catalog is owned by the host; the editor only reads `Product` records
//! from a JSON array and never writes them back.

use shared::{Dimensions, Product};

use crate::error::{EditorError, EditorResult};

/// Parse and check a JSON array of products
pub fn parse_catalog(json: &str) -> EditorResult<Vec<Product>> {
    let products: Vec<Product> =
        serde_json::from_str(json).map_err(|e| EditorError::Catalog(e.to_string()))?;
    for product in &products {
        validate_product(product)?;
    }
    tracing::info!("Loaded {} catalog products", products.len());
    Ok(products)
}

/// Reject products the canvas cannot place: empty id or a footprint that is
/// not a positive finite size
pub fn validate_product(product: &Product) -> EditorResult<()> {
    if product.id.trim().is_empty() {
        return Err(EditorError::Catalog(format!(
            "product '{}' has an empty id",
            product.name
        )));
    }
    let Dimensions { width, height, .. } = product.dimensions;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(EditorError::Catalog(format!(
            "product '{}' has a non-positive footprint {}x{}",
            product.id, width, height
        )));
    }
    Ok(())
}

/// Built-in catalog used when no `--catalog` file is given
pub fn demo_catalog() -> Vec<Product> {
    [
        ("sofa", "Sofa", 180.0, 200.0, 90.0),
        ("armchair", "Armchair", 80.0, 85.0, 95.0),
        ("coffee-table", "Coffee table", 100.0, 60.0, 45.0),
        ("dining-table", "Dining table", 120.0, 80.0, 75.0),
        ("chair", "Chair", 45.0, 50.0, 90.0),
        ("bed", "Double bed", 160.0, 210.0, 50.0),
        ("wardrobe", "Wardrobe", 150.0, 60.0, 220.0),
        ("floor-lamp", "Floor lamp", 40.0, 40.0, 160.0),
        ("rug", "Rug", 200.0, 140.0, 1.0),
    ]
    .into_iter()
    .map(|(id, name, width, height, depth)| Product {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("/images/{id}.png"),
        dimensions: Dimensions {
            width,
            height,
            depth,
        },
    })
    .collect()
}
