//! Explicit wiring of in-memory stores into services.
//!
//! # Responsibility
//! - Own one repository per entity type and the services built on them.
//! - Report aggregate store statistics.
//!
//! # Invariants
//! - Each `Storefront` owns independent stores; there is no process-global
//!   registry.

use crate::config::StoreConfig;
use crate::model::product::Product;
use crate::model::user::User;
use crate::repo::memory_repo::InMemoryRepository;
use crate::service::error::ServiceResult;
use crate::service::product_service::ProductService;
use crate::service::seed::{seed_sample_data, SeedSummary};
use crate::service::user_service::UserService;
use serde::Serialize;
use std::sync::Arc;

pub type SharedUserRepository = Arc<InMemoryRepository<User>>;
pub type SharedProductRepository = Arc<InMemoryRepository<Product>>;

/// Aggregate counters across both stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total_users: usize,
    pub total_products: usize,
    pub products_in_stock: usize,
}

/// User and product services over shared in-memory stores.
///
/// `Storefront` is `Sync`; wrap it in `Arc` to hand it to worker threads.
pub struct Storefront {
    users: UserService<SharedUserRepository>,
    products: ProductService<SharedProductRepository>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Storefront {
    /// Builds a storefront over empty stores.
    pub fn in_memory() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
        )
    }

    /// Builds a storefront over caller-owned stores.
    pub fn with_repositories(
        users: SharedUserRepository,
        products: SharedProductRepository,
    ) -> Self {
        Self {
            users: UserService::new(users),
            products: ProductService::new(products),
        }
    }

    /// Builds a storefront and seeds it when `config` asks for sample data.
    pub fn from_config(config: &StoreConfig) -> ServiceResult<Self> {
        let storefront = Self::in_memory();
        if config.seed_sample_data {
            storefront.seed_sample_data()?;
        }
        Ok(storefront)
    }

    pub fn users(&self) -> &UserService<SharedUserRepository> {
        &self.users
    }

    pub fn products(&self) -> &ProductService<SharedProductRepository> {
        &self.products
    }

    pub fn seed_sample_data(&self) -> ServiceResult<SeedSummary> {
        seed_sample_data(&self.users, &self.products)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_users: self.users.user_count(),
            total_products: self.products.product_count(),
            products_in_stock: self.products.get_in_stock_products().len(),
        }
    }
}
