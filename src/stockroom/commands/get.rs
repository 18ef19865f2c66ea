use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::ProductId;
use crate::store::DataStore;

use super::helpers::position_of;

pub fn run<S: DataStore>(store: &S, id: ProductId) -> Result<CmdResult> {
    let mut products = store.load()?;
    let index = position_of(&products, id)?;
    let product = products.swap_remove(index);
    Ok(CmdResult::default().with_listed_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockroomError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_the_product() {
        let store = StoreFixture::new().with_catalog().build();
        let result = run(&store, 3).unwrap();
        assert_eq!(result.listed_products[0].name, "Apple");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().with_catalog().build();
        assert!(matches!(
            run(&store, 99).unwrap_err(),
            StockroomError::NotFound(99)
        ));
    }
}
