//! Product domain model and write payloads.
//!
//! # Responsibility
//! - Define the stored `Product` record and its stock helpers.
//! - Turn create/patch payloads into validated record state.
//!
//! # Invariants
//! - `price` is never negative once stored.
//! - `stock` is unsigned; decreases that would underflow are rejected.
//! - In-stock means `stock > 0`.

use crate::model::entity::{Entity, EntityId};
use crate::model::validation::{non_blank, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a stored product.
pub type ProductId = EntityId;

/// Stored product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// `None` until the repository assigns one.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    /// Builds an unsaved product without validation.
    pub fn new(
        name: impl Into<String>,
        description: Option<&str>,
        price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.map(str::to_string),
            price,
            stock,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Returns whether the name contains `fragment`, ignoring case.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }

    /// Returns whether `min <= price <= max`.
    pub fn price_within(&self, min: Decimal, max: Decimal) -> bool {
        self.price >= min && self.price <= max
    }

    /// Adds `quantity` units.
    ///
    /// # Errors
    /// - `StockOutOfRange` when the sum does not fit the stock counter.
    pub fn increase_stock(&mut self, quantity: u64) -> Result<(), ValidationError> {
        let total = u64::from(self.stock).saturating_add(quantity);
        self.stock = u32::try_from(total).map_err(|_| {
            ValidationError::StockOutOfRange(i64::try_from(total).unwrap_or(i64::MAX))
        })?;
        Ok(())
    }

    /// Removes `quantity` units.
    ///
    /// # Errors
    /// - `InsufficientStock` when fewer than `quantity` units are available;
    ///   stock is left unchanged.
    pub fn decrease_stock(&mut self, quantity: u64) -> Result<(), ValidationError> {
        let remaining = u64::from(self.stock)
            .checked_sub(quantity)
            .ok_or(ValidationError::InsufficientStock {
                available: self.stock,
                requested: quantity,
            })?;
        // remaining <= current stock, so it always fits.
        self.stock = u32::try_from(remaining).unwrap_or(self.stock);
        Ok(())
    }

    /// Applies a signed stock delta: positive adds, negative removes.
    pub fn adjust_stock(&mut self, delta: i64) -> Result<(), ValidationError> {
        if delta >= 0 {
            self.increase_stock(delta.unsigned_abs())
        } else {
            self.decrease_stock(delta.unsigned_abs())
        }
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }
}

/// Create payload for a product.
///
/// Stock is signed so negative input can be reported instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Decimal, stock: i64) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            price: Some(price),
            stock: Some(stock),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates field-level rules and builds an unsaved product.
    ///
    /// # Errors
    /// - `BlankName` when the name is absent or blank.
    /// - `MissingPrice` / `NegativePrice` for an absent or negative price.
    /// - `MissingStock` / `NegativeStock` / `StockOutOfRange` for bad stock.
    pub fn into_product(self) -> Result<Product, ValidationError> {
        let name = non_blank(self.name.as_deref())
            .ok_or(ValidationError::BlankName {
                entity: Product::KIND,
            })?
            .to_string();
        let price = validate_price(self.price.ok_or(ValidationError::MissingPrice)?)?;
        let stock = validate_stock(self.stock.ok_or(ValidationError::MissingStock)?)?;

        Ok(Product {
            id: None,
            name,
            description: self.description,
            price,
            stock,
        })
    }
}

/// Partial update payload for a product.
///
/// `name` follows blank-means-absent semantics. A supplied blank
/// `description` clears it; `None` keeps the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// Validates the supplied fields, then overwrites them on `product`.
    ///
    /// Nothing is written when any supplied field is invalid.
    pub fn apply_to(&self, product: &mut Product) -> Result<(), ValidationError> {
        let price = self.price.map(validate_price).transpose()?;
        let stock = self.stock.map(validate_stock).transpose()?;

        if let Some(name) = non_blank(self.name.as_deref()) {
            product.name = name.to_string();
        }
        if let Some(description) = self.description.as_deref() {
            product.description = non_blank(Some(description)).map(str::to_string);
        }
        if let Some(price) = price {
            product.price = price;
        }
        if let Some(stock) = stock {
            product.stock = stock;
        }
        Ok(())
    }
}

fn validate_price(price: Decimal) -> Result<Decimal, ValidationError> {
    if price < Decimal::ZERO {
        return Err(ValidationError::NegativePrice(price));
    }
    Ok(price)
}

fn validate_stock(stock: i64) -> Result<u32, ValidationError> {
    if stock < 0 {
        return Err(ValidationError::NegativeStock(stock));
    }
    u32::try_from(stock).map_err(|_| ValidationError::StockOutOfRange(stock))
}
