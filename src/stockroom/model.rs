use crate::error::{Result, StockroomError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ProductId = u64;

/// A catalog record as it is persisted. Field order here is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

/// The editable fields of a product, used to point at the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Category,
    Quantity,
    Price,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
            Field::Price => "price",
        };
        f.write_str(label)
    }
}

/// Validated input for a product that has not been assigned an ID yet.
///
/// Construction through [`NewProduct::new`] is the only way to get one, so a
/// `NewProduct` always satisfies the creation invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    category: String,
    quantity: i64,
    price: f64,
}

impl NewProduct {
    pub fn new(name: &str, category: &str, quantity: i64, price: f64) -> Result<Self> {
        Ok(Self {
            name: validate_text(Field::Name, name)?,
            category: validate_text(Field::Category, category)?,
            quantity: validate_quantity(quantity)?,
            price: validate_price(price)?,
        })
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Raw field edits for an existing product.
///
/// Values are kept as text: numeric fields are parsed when the update is applied so
/// that one bad value does not discard the rest of the edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}

pub fn validate_text(field: Field, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StockroomError::validation(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_quantity(quantity: i64) -> Result<i64> {
    if quantity <= 0 {
        return Err(StockroomError::validation(
            Field::Quantity,
            "must be greater than zero",
        ));
    }
    Ok(quantity)
}

pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() {
        return Err(StockroomError::validation(Field::Price, "must be a finite number"));
    }
    if price <= 0.0 {
        return Err(StockroomError::validation(
            Field::Price,
            "must be greater than zero",
        ));
    }
    Ok(price)
}

/// Parses and validates a quantity typed by a user.
pub fn parse_quantity(input: &str) -> Result<i64> {
    let quantity = input.trim().parse::<i64>().map_err(|_| {
        StockroomError::validation(Field::Quantity, format!("'{}' is not a whole number", input.trim()))
    })?;
    validate_quantity(quantity)
}

/// Parses and validates a price typed by a user.
pub fn parse_price(input: &str) -> Result<f64> {
    let price = input.trim().parse::<f64>().map_err(|_| {
        StockroomError::validation(Field::Price, format!("'{}' is not a number", input.trim()))
    })?;
    validate_price(price)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Quantity,
    Price,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "quantity" | "qty" => Ok(SortKey::Quantity),
            "price" => Ok(SortKey::Price),
            other => Err(format!(
                "unknown sort key '{}' (expected name, quantity or price)",
                other
            )),
        }
    }
}

/// How a listing is shaped. Filtering by category and sorting are exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListView {
    #[default]
    All,
    Category(String),
    Sorted(SortKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Exact match against the ID rendered as text.
    Id,
    /// Case-insensitive substring of the name.
    Name,
    /// Case-insensitive substring of either the ID text or the name.
    #[default]
    Any,
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SearchMode::Id),
            "name" => Ok(SearchMode::Name),
            "any" => Ok(SearchMode::Any),
            other => Err(format!(
                "unknown search mode '{}' (expected id, name or any)",
                other
            )),
        }
    }
}
