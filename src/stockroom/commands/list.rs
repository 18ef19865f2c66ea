use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ListView, Product, SortKey};
use crate::store::DataStore;

/// Shapes a snapshot for display without touching the store.
pub fn apply(products: &[Product], view: &ListView) -> Vec<Product> {
    match view {
        ListView::All => products.to_vec(),
        ListView::Category(term) => {
            let term = term.to_lowercase();
            products
                .iter()
                .filter(|p| p.category.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        ListView::Sorted(key) => {
            let mut sorted = products.to_vec();
            sort(&mut sorted, *key);
            sorted
        }
    }
}

/// Stable sort, ascending.
pub fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Name => products.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortKey::Quantity => products.sort_by_key(|p| p.quantity),
        SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
}

pub fn run<S: DataStore>(store: &S, view: &ListView) -> Result<CmdResult> {
    let products = store.load()?;
    let listed = apply(&products, view);

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let message = match view {
            ListView::Category(term) if !products.is_empty() => {
                format!("No products found in category '{}'.", term)
            }
            _ => "No products found.".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result.with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn all_keeps_insertion_order() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, &ListView::All).unwrap();
        assert_eq!(
            names(&result.listed_products),
            vec!["Widget", "gadget", "Apple", "Screwdriver set"]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn sorts_by_name_ignoring_case() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, &ListView::Sorted(SortKey::Name)).unwrap();
        assert_eq!(
            names(&result.listed_products),
            vec!["Apple", "gadget", "Screwdriver set", "Widget"]
        );
    }

    #[test]
    fn sorts_by_quantity_and_price() {
        let store = StoreFixture::new().with_catalog().build();

        let by_quantity = run(&store, &ListView::Sorted(SortKey::Quantity)).unwrap();
        assert_eq!(
            by_quantity
                .listed_products
                .iter()
                .map(|p| p.quantity)
                .collect::<Vec<_>>(),
            vec![3, 5, 10, 40]
        );

        let by_price = run(&store, &ListView::Sorted(SortKey::Price)).unwrap();
        assert_eq!(
            names(&by_price.listed_products),
            vec!["Apple", "Widget", "gadget", "Screwdriver set"]
        );
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let store = StoreFixture::new()
            .with_product(1, "First", "A", 2, 5.0)
            .with_product(2, "Second", "B", 1, 5.0)
            .with_product(3, "Third", "C", 3, 5.0)
            .build();
        let result = run(&store, &ListView::Sorted(SortKey::Price)).unwrap();
        assert_eq!(
            names(&result.listed_products),
            vec!["First", "Second", "Third"]
        );
    }

    #[test]
    fn filters_by_category_substring() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, &ListView::Category("tool".into())).unwrap();
        assert_eq!(
            names(&result.listed_products),
            vec!["Widget", "gadget", "Screwdriver set"]
        );
    }

    #[test]
    fn empty_category_term_matches_everything() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, &ListView::Category(String::new())).unwrap();
        assert_eq!(result.listed_products.len(), 4);
    }

    #[test]
    fn unmatched_category_reports_it() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, &ListView::Category("Toys".into())).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No products found in category 'Toys'."
        );
    }

    #[test]
    fn empty_store_reports_no_products() {
        let store = InMemoryStore::new();
        let result = run(&store, &ListView::Sorted(SortKey::Name)).unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "No products found.");
    }

    #[test]
    fn apply_leaves_the_input_untouched() {
        let store = StoreFixture::new().with_catalog().build();
        let snapshot = store.load().unwrap();
        let _ = apply(&snapshot, &ListView::Sorted(SortKey::Name));
        assert_eq!(snapshot, store.load().unwrap());
    }
}
