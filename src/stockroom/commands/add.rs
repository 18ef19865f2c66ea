use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewProduct;
use crate::store::{next_id, DataStore};

use super::helpers::describe;

pub fn run<S: DataStore>(
    store: &mut S,
    name: &str,
    category: &str,
    quantity: i64,
    price: f64,
) -> Result<CmdResult> {
    // Validate before touching the store.
    let draft = NewProduct::new(name, category, quantity, price)?;

    let mut products = store.load()?;
    let id = next_id(&products)?;
    let product = draft.into_product(id);
    products.push(product.clone());
    store.save(&products)?;

    tracing::info!(id, name = %product.name, "product added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {}",
        describe(&product)
    )));
    Ok(result.with_affected_products(vec![product]))
}
