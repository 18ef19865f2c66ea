//! # API Facade
//!
//! The single entry point for every stockroom front-end. It dispatches to the
//! command modules and returns their `CmdResult`s unchanged.
//!
//! `StockroomApi<S: DataStore>` owns the store it was given, so the catalog file
//! is chosen once by whoever builds the API (the CLI resolves it from flags,
//! environment and config) and tests can pass an `InMemoryStore` instead.
//!
//! The facade never prints, never prompts and holds no business rules.

use crate::commands;
use crate::error::Result;
use crate::model::{ListView, ProductId, ProductUpdate, SearchMode};
use crate::store::DataStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, StockroomPaths};

pub struct StockroomApi<S: DataStore> {
    store: S,
    paths: commands::StockroomPaths,
}

impl<S: DataStore> StockroomApi<S> {
    pub fn new(store: S, paths: commands::StockroomPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_product(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
        price: f64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, category, quantity, price)
    }

    pub fn list_products(&self, view: &ListView) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, view)
    }

    pub fn search_products(&self, mode: SearchMode, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, mode, query)
    }

    pub fn get_product(&self, id: ProductId) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_product(&mut self, id: ProductId, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, confirmed)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
