//! Identity contract shared by every stored record.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Sequential identifier assigned by a repository.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = u64;

/// Record that can live in a repository.
///
/// The repository owns identifier assignment: callers build records with
/// `id() == None` and receive the populated identifier back from `save`.
pub trait Entity: Clone + Send + Sync {
    /// Key type used by the backing store.
    type Id: Copy + Ord + Hash + Debug + Display + Send + Sync + From<u64> + Into<u64>;

    /// Short lowercase label used in logs and errors (`user`, `product`).
    const KIND: &'static str;

    /// Returns the assigned identifier, or `None` for unsaved records.
    fn id(&self) -> Option<Self::Id>;

    /// Stores the repository-assigned identifier.
    fn assign_id(&mut self, id: Self::Id);
}
