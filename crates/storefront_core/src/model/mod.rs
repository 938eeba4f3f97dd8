//! Domain model for stored users and products.
//!
//! # Responsibility
//! - Define the canonical records held by the in-memory repositories.
//! - Define explicit create/patch payloads consumed by the service layer.
//! - Define typed validation failures shared by all write paths.
//!
//! # Invariants
//! - Every stored record is identified by a repository-assigned `EntityId`.
//! - A record without an identifier has never been stored.

pub mod entity;
pub mod product;
pub mod user;
pub mod validation;
