use crate::error::{Result, StockroomError};
use crate::model::{Product, ProductId};

/// Position of the product with `id` in a loaded collection.
pub fn position_of(products: &[Product], id: ProductId) -> Result<usize> {
    products
        .iter()
        .position(|p| p.id == id)
        .ok_or(StockroomError::NotFound(id))
}

pub fn describe(product: &Product) -> String {
    format!("{} (ID {})", product.name, product.id)
}
