//! Product use-case service.
//!
//! # Responsibility
//! - Validate product payloads before any repository write.
//! - Provide name/price/stock searches with the documented defaults.
//! - Apply stock adjustments as one atomic read-modify-write.
//!
//! # Invariants
//! - Stored price and stock are never negative.
//! - Concurrent stock adjustments on one product serialize; none is lost.

use crate::model::product::{NewProduct, Product, ProductId, ProductPatch};
use crate::model::validation::{non_blank, ValidationError};
use crate::repo::memory_repo::Repository;
use crate::repo::queries::ProductQueries;
use crate::service::error::{log_storage_failure, missing, reject, ServiceResult};
use log::info;
use rust_decimal::Decimal;

/// Upper bound used when a price-range search omits its maximum: `999999.99`.
pub fn price_ceiling() -> Decimal {
    Decimal::new(99_999_999, 2)
}

/// Product service facade over a repository implementation.
pub struct ProductService<R: Repository<Product>> {
    repo: R,
}

impl<R: Repository<Product>> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_products(&self) -> Vec<Product> {
        self.repo.find_all()
    }

    /// Gets one product by identifier.
    ///
    /// # Errors
    /// - `NotFound` when no product has `id`.
    pub fn get_product_by_id(&self, id: ProductId) -> ServiceResult<Product> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| missing::<Product>("product_get", id))
    }

    /// Case-insensitive name search.
    ///
    /// A blank or absent query returns every product.
    pub fn search_products_by_name(&self, name: Option<&str>) -> Vec<Product> {
        match non_blank(name) {
            Some(fragment) => self.repo.find_by_name_containing(fragment),
            None => self.get_all_products(),
        }
    }

    /// Inclusive price-range search.
    ///
    /// # Contract
    /// - Absent `min` means zero; absent `max` means `price_ceiling()`.
    /// - Fails with `InvertedPriceRange` when `min > max`.
    pub fn get_products_by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> ServiceResult<Vec<Product>> {
        let min = min.unwrap_or(Decimal::ZERO);
        let max = max.unwrap_or_else(price_ceiling);
        if min > max {
            return Err(reject(
                "product_price_search",
                ValidationError::InvertedPriceRange { min, max },
            ));
        }
        Ok(self.repo.find_by_price_range(min, max))
    }

    pub fn get_in_stock_products(&self) -> Vec<Product> {
        self.repo.find_in_stock()
    }

    pub fn get_out_of_stock_products(&self) -> Vec<Product> {
        self.repo.find_out_of_stock()
    }

    /// Creates one product.
    ///
    /// # Contract
    /// - `name` must be non-blank.
    /// - `price` and `stock` must be present and non-negative.
    pub fn create_product(&self, payload: NewProduct) -> ServiceResult<Product> {
        let product = payload
            .into_product()
            .map_err(|err| reject("product_create", err))?;
        let created = self
            .repo
            .save(product)
            .map_err(|err| log_storage_failure("product_create", err.into()))?;

        info!(
            "event=product_create module=service status=ok id={} stock={}",
            created.id.unwrap_or_default(),
            created.stock
        );
        Ok(created)
    }

    /// Applies a partial update to an existing product.
    ///
    /// Supplied price/stock values are re-validated; the stored record is
    /// untouched when any of them is invalid.
    pub fn update_product(&self, id: ProductId, patch: &ProductPatch) -> ServiceResult<Product> {
        let updated = self
            .repo
            .update_checked(id, |product, _| patch.apply_to(product))
            .map_err(|err| reject("product_update", err))?
            .ok_or_else(|| missing::<Product>("product_update", id))?;

        info!("event=product_update module=service status=ok id={id}");
        Ok(updated)
    }

    /// Deletes one product by identifier.
    ///
    /// # Errors
    /// - `NotFound` when no product has `id`.
    pub fn delete_product(&self, id: ProductId) -> ServiceResult<()> {
        if !self.repo.delete_by_id(id) {
            return Err(missing::<Product>("product_delete", id));
        }
        info!("event=product_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Adjusts stock by a signed `delta`.
    ///
    /// # Contract
    /// - Positive `delta` adds units; negative removes `|delta|` units.
    /// - A decrease below zero fails with `InsufficientStock` and leaves the
    ///   stored stock unchanged.
    /// - Read and write happen in one exclusive section per call.
    pub fn adjust_stock(&self, id: ProductId, delta: i64) -> ServiceResult<Product> {
        let updated = self
            .repo
            .update_checked(id, |product, _| product.adjust_stock(delta))
            .map_err(|err| reject("product_stock_adjust", err))?
            .ok_or_else(|| missing::<Product>("product_stock_adjust", id))?;

        info!(
            "event=product_stock_adjust module=service status=ok id={id} delta={delta} stock={}",
            updated.stock
        );
        Ok(updated)
    }

    pub fn product_count(&self) -> usize {
        self.repo.count()
    }
}

#[cfg(test)]
mod tests {
    use super::price_ceiling;

    #[test]
    fn price_ceiling_matches_documented_sentinel() {
        assert_eq!(price_ceiling().to_string(), "999999.99");
    }
}
