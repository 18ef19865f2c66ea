use super::DataStore;
use crate::error::{Result, StockroomError};
use crate::model::Product;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// How many times `save` has completed.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Make every following `save` fail as if the disk were unwritable.
    pub fn fail_saves(&mut self) {
        self.fail_saves = true;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        if self.fail_saves {
            return Err(StockroomError::Store("store is read-only".to_string()));
        }
        self.products = products.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ProductId;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_product(
            mut self,
            id: ProductId,
            name: &str,
            category: &str,
            quantity: i64,
            price: f64,
        ) -> Self {
            self.store.products.push(Product {
                id,
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                price,
            });
            self
        }

        /// The catalog used across the command tests.
        pub fn with_catalog(self) -> Self {
            self.with_product(1, "Widget", "Tools", 5, 9.99)
                .with_product(2, "gadget", "Tools", 10, 19.99)
                .with_product(3, "Apple", "Produce", 40, 0.5)
                .with_product(4, "Screwdriver set", "Hand Tools", 3, 29.0)
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
