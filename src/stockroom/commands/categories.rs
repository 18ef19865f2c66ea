use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::DataStore;

/// Distinct categories, in the order they first appear.
pub fn distinct(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let products = store.load()?;
    let categories = distinct(&products);

    let mut result = CmdResult::default();
    if categories.is_empty() {
        result.add_message(CmdMessage::info("No categories yet."));
    }
    Ok(result.with_categories(categories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_each_category_once() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store).unwrap();
        assert_eq!(result.categories, vec!["Tools", "Produce", "Hand Tools"]);
    }

    #[test]
    fn empty_store_has_no_categories() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.categories.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
