//! Core use-case services.
//!
//! # Responsibility
//! - Enforce entity invariants before delegating to repositories.
//! - Translate violations into `ServiceError::{NotFound, InvalidArgument}`
//!   and store failures into `ServiceError::Storage`.
//! - Wire per-entity stores into one storefront facade.

pub mod error;
pub mod product_service;
pub mod seed;
pub mod storefront;
pub mod user_service;
