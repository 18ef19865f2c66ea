use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, SearchMode};
use crate::store::DataStore;

pub fn matches(product: &Product, mode: SearchMode, query: &str) -> bool {
    match mode {
        SearchMode::Id => product.id.to_string() == query,
        SearchMode::Name => product
            .name
            .to_lowercase()
            .contains(&query.to_lowercase()),
        SearchMode::Any => {
            let query = query.to_lowercase();
            product.id.to_string().contains(&query) || product.name.to_lowercase().contains(&query)
        }
    }
}

/// Products matching `query`, in collection order. No match is an empty result, not an error.
pub fn find(products: &[Product], mode: SearchMode, query: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches(p, mode, query))
        .cloned()
        .collect()
}

pub fn run<S: DataStore>(store: &S, mode: SearchMode, query: &str) -> Result<CmdResult> {
    let products = store.load()?;
    let found = find(&products, mode, query);

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No products found."));
    }
    Ok(result.with_listed_products(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn by_id_is_exact() {
        let store = StoreFixture::new()
            .with_catalog()
            .with_product(12, "Bolt", "Hardware", 100, 0.1)
            .build();

        let result = run(&store, SearchMode::Id, "1").unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert_eq!(result.listed_products[0].name, "Widget");

        let result = run(&store, SearchMode::Id, "12").unwrap();
        assert_eq!(result.listed_products[0].name, "Bolt");

        assert!(run(&store, SearchMode::Id, " 1")
            .unwrap()
            .listed_products
            .is_empty());
    }

    #[test]
    fn by_name_is_case_insensitive_substring() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, SearchMode::Name, "WIDG").unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert_eq!(result.listed_products[0].id, 1);

        let result = run(&store, SearchMode::Name, "e").unwrap();
        assert_eq!(
            result
                .listed_products
                .iter()
                .map(|p| p.id)
                .collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn any_matches_id_text_or_name() {
        let store = StoreFixture::new()
            .with_catalog()
            .with_product(31, "Hammer", "Tools", 2, 15.0)
            .build();

        let result = run(&store, SearchMode::Any, "3").unwrap();
        assert_eq!(
            result
                .listed_products
                .iter()
                .map(|p| p.id)
                .collect::<Vec<_>>(),
            vec![3, 31]
        );

        let result = run(&store, SearchMode::Any, "hammer").unwrap();
        assert_eq!(result.listed_products[0].id, 31);
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, SearchMode::Name, "spaceship").unwrap();
        assert!(result.listed_products.is_empty());
        assert_eq!(result.messages[0].content, "No products found.");
    }
}
