//! Repository layer contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the storage contract used by the service layer.
//! - Provide one generic concurrent store shared by all entity types.
//! - Express per-entity filters as predicates over that store.
//!
//! # Invariants
//! - Identifiers are assigned by the repository, start at 1, strictly
//!   increase and are never reused within a process.
//! - Writes are linearizable; readers never observe a partial write.

pub mod memory_repo;
pub mod queries;
