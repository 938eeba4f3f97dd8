//! Core domain logic for the storefront store.
//! This crate is the single source of truth for user and product invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StoreConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::entity::{Entity, EntityId};
pub use model::product::{NewProduct, Product, ProductId, ProductPatch};
pub use model::user::{NewUser, User, UserId, UserPatch, ADMIN_ROLE, DEFAULT_ROLE};
pub use model::validation::ValidationError;
pub use repo::memory_repo::{InMemoryRepository, Others, RepoError, RepoResult, Repository};
pub use repo::queries::{ProductQueries, UserQueries};
pub use service::error::{ServiceError, ServiceResult};
pub use service::product_service::{price_ceiling, ProductService};
pub use service::seed::SeedSummary;
pub use service::storefront::{StoreStats, Storefront};
pub use service::user_service::UserService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
