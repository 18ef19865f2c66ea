use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{parse_price, parse_quantity, Field, Product, ProductId, ProductUpdate};
use crate::store::DataStore;

use super::helpers::{describe, position_of};

pub fn run<S: DataStore>(
    store: &mut S,
    id: ProductId,
    update: &ProductUpdate,
) -> Result<CmdResult> {
    let mut products = store.load()?;
    let index = position_of(&products, id)?;

    let mut result = CmdResult::default();
    apply(&mut products[index], update, &mut result);
    store.save(&products)?;

    let product = products.swap_remove(index);
    tracing::info!(id, "product updated");
    result.add_message(CmdMessage::success(format!(
        "Product updated: {}",
        describe(&product)
    )));
    Ok(result.with_affected_products(vec![product]))
}

/// Applies every non-blank field. A numeric field that fails to parse or is out of
/// range keeps its old value and leaves a warning in `result`.
fn apply(product: &mut Product, update: &ProductUpdate, result: &mut CmdResult) {
    if let Some(name) = non_blank(&update.name) {
        product.name = name.to_string();
    }
    if let Some(category) = non_blank(&update.category) {
        product.category = category.to_string();
    }
    if let Some(quantity) = non_blank(&update.quantity) {
        match parse_quantity(quantity) {
            Ok(value) => product.quantity = value,
            Err(e) => reject(result, product.id, Field::Quantity, &e.to_string()),
        }
    }
    if let Some(price) = non_blank(&update.price) {
        match parse_price(price) {
            Ok(value) => product.price = value,
            Err(e) => reject(result, product.id, Field::Price, &e.to_string()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn reject(result: &mut CmdResult, id: ProductId, field: Field, reason: &str) {
    tracing::debug!(id, %field, reason, "field left unchanged");
    result.add_message(CmdMessage::warning(format!(
        "{}. The {} was not changed.",
        reason, field
    )));
}
