//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary for the catalog. A store
//! reads and writes the *whole* product collection at once: every operation loads
//! a fresh snapshot, changes it in memory and writes it back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document holding an array of
//!   products (`products.json` unless configured otherwise).
//! - [`memory::InMemoryStore`]: keeps the collection in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "name": "Widget",
//!         "category": "Tools",
//!         "quantity": 5,
//!         "price": 9.99
//!     }
//! ]
//! ```
//!
//! There is no locking and no partial-write protection: two processes writing at
//! the same time can lose updates, and a crash mid-write can leave a truncated
//! document behind.

use crate::error::{Result, StockroomError};
use crate::model::{Product, ProductId};

pub mod fs;
pub mod memory;

/// Abstract interface for product storage.
pub trait DataStore {
    /// Read the full collection. A store with nothing persisted yet yields an empty one.
    fn load(&self) -> Result<Vec<Product>>;

    /// Replace the persisted collection with `products`, keeping their order.
    fn save(&mut self, products: &[Product]) -> Result<()>;
}

/// The ID the next created product receives: one past the highest ID in use.
pub fn next_id(products: &[Product]) -> Result<ProductId> {
    match products.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| StockroomError::Store("product IDs exhausted".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: "Misc".to_string(),
            quantity: 1,
            price: 1.0,
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_follows_the_maximum_not_the_length() {
        let products = vec![product(4), product(2), product(9)];
        assert_eq!(next_id(&products).unwrap(), 10);
    }

    #[test]
    fn next_id_fails_when_ids_run_out() {
        let products = vec![product(3), product(ProductId::MAX)];
        assert!(matches!(
            next_id(&products),
            Err(StockroomError::Store(_))
        ));
    }
}
