use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::store::DataStore;

use super::helpers::{describe, position_of};

/// Removes a product. The caller must have asked the user first: without
/// `confirmed` nothing is changed.
pub fn run<S: DataStore>(store: &mut S, id: ProductId, confirmed: bool) -> Result<CmdResult> {
    let mut products = store.load()?;
    let index = position_of(&products, id)?;

    let mut result = CmdResult::default();
    if !confirmed {
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    let removed = products.remove(index);
    store.save(&products)?;

    tracing::info!(id, "product deleted");
    result.add_message(CmdMessage::success(format!(
        "Product deleted: {}",
        describe(&removed)
    )));
    Ok(result.with_affected_products(vec![removed]))
}
