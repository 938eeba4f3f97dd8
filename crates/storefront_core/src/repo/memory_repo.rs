//! Repository contract and generic in-memory store.
//!
//! # Responsibility
//! - Keep one entity collection per store, keyed by assigned identifier.
//! - Offer snapshot reads and guarded read-modify-write operations.
//!
//! # Invariants
//! - Identifier allocation happens inside the write section, so allocation
//!   order equals insertion order.
//! - Identifiers live in `1..u64::MAX`; allocation never wraps and never
//!   hands out a key that is already stored.
//! - A guarded write whose check fails leaves the store untouched.
//! - Read results are owned snapshots; no lock outlives a call.

use crate::model::entity::Entity;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const FIRST_ID: u64 = 1;
/// Exclusive upper bound of the identifier space.
const ID_LIMIT: u64 = u64::MAX;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage failure raised by a repository write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    /// Caller-held identifier outside `1..u64::MAX`.
    IdOutOfRange(u64),
    /// Every identifier below `u64::MAX` has been allocated.
    IdSpaceExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdOutOfRange(id) => {
                write!(f, "identifier {id} is outside the supported range")
            }
            Self::IdSpaceExhausted => write!(f, "no identifiers left to allocate"),
        }
    }
}

impl Error for RepoError {}

/// Storage contract for one entity type.
///
/// Absence is reported as `None`/`false`, never as an error.
pub trait Repository<T: Entity> {
    /// Returns every stored record in ascending identifier order.
    fn find_all(&self) -> Vec<T>;
    fn find_by_id(&self, id: T::Id) -> Option<T>;
    /// Stores `entity`, assigning the next identifier when it has none.
    ///
    /// Records that already carry an identifier overwrite that key, even one
    /// freed by an earlier delete.
    ///
    /// # Errors
    /// - `IdOutOfRange` for a caller-held identifier of 0 or `u64::MAX`.
    /// - `IdSpaceExhausted` when no identifier is left to allocate.
    fn save(&self, entity: T) -> RepoResult<T>;
    /// Returns `true` iff a record existed and was removed.
    fn delete_by_id(&self, id: T::Id) -> bool;
    fn exists_by_id(&self, id: T::Id) -> bool;
    fn count(&self) -> usize;
    /// Returns every record matching `predicate`, in identifier order.
    fn find_matching(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;
    /// Returns the lowest-identifier record matching `predicate`.
    fn find_first(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T>;

    /// Saves `entity` only if `check` accepts it.
    ///
    /// `check` runs in the same exclusive section as the write and sees every
    /// stored record except the one sharing `entity`'s identifier. Identifier
    /// failures surface through `E::from`.
    fn insert_checked<E, F>(&self, entity: T, check: F) -> Result<T, E>
    where
        E: From<RepoError>,
        F: FnOnce(&T, Others<'_, T>) -> Result<(), E>;

    /// Mutates the record at `id` through `apply` and stores the result.
    ///
    /// `apply` works on a copy inside the exclusive section; the copy is only
    /// written back when it returns `Ok`. Returns `Ok(None)` for unknown ids.
    fn update_checked<E, F>(&self, id: T::Id, apply: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut T, Others<'_, T>) -> Result<(), E>;
}

/// Read-only view of the records other than the one being written.
pub struct Others<'a, T: Entity> {
    records: &'a BTreeMap<T::Id, T>,
    exclude: Option<T::Id>,
}

impl<'a, T: Entity> Others<'a, T> {
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let exclude = self.exclude;
        self.records
            .iter()
            .filter(move |(id, _)| Some(**id) != exclude)
            .map(|(_, record)| record)
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&'a T> {
        self.iter().find(|record| predicate(record))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Thread-safe in-memory store.
///
/// Share one instance between threads through `Arc`.
pub struct InMemoryRepository<T: Entity> {
    records: RwLock<BTreeMap<T::Id, T>>,
    next_id: AtomicU64,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(FIRST_ID),
        }
    }

    /// Returns the identifier the next unsaved record will receive.
    pub fn peek_next_id(&self) -> T::Id {
        T::Id::from(self.next_id.load(Ordering::SeqCst))
    }

    /// Resolves the storage key for `entity`, allocating one if needed.
    ///
    /// Must be called while holding the write lock.
    fn resolve_id(&self, entity: &mut T) -> RepoResult<T::Id> {
        match entity.id() {
            Some(id) => {
                let raw: u64 = id.into();
                if !(FIRST_ID..ID_LIMIT).contains(&raw) {
                    return Err(RepoError::IdOutOfRange(raw));
                }
                // Keep caller-held ids out of the allocation range.
                self.next_id.fetch_max(raw + 1, Ordering::SeqCst);
                Ok(id)
            }
            None => {
                let raw = self
                    .next_id
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| {
                        (next < ID_LIMIT).then(|| next + 1)
                    })
                    .map_err(|_| RepoError::IdSpaceExhausted)?;
                let id = T::Id::from(raw);
                entity.assign_id(id);
                Ok(id)
            }
        }
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn find_all(&self) -> Vec<T> {
        self.records.read().values().cloned().collect()
    }

    fn find_by_id(&self, id: T::Id) -> Option<T> {
        self.records.read().get(&id).cloned()
    }

    fn save(&self, mut entity: T) -> RepoResult<T> {
        let mut records = self.records.write();
        let id = self.resolve_id(&mut entity)?;
        records.insert(id, entity.clone());
        Ok(entity)
    }

    fn delete_by_id(&self, id: T::Id) -> bool {
        self.records.write().remove(&id).is_some()
    }

    fn exists_by_id(&self, id: T::Id) -> bool {
        self.records.read().contains_key(&id)
    }

    fn count(&self) -> usize {
        self.records.read().len()
    }

    fn find_matching(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    fn find_first(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T> {
        self.records
            .read()
            .values()
            .find(|record| predicate(record))
            .cloned()
    }

    fn insert_checked<E, F>(&self, mut entity: T, check: F) -> Result<T, E>
    where
        E: From<RepoError>,
        F: FnOnce(&T, Others<'_, T>) -> Result<(), E>,
    {
        let mut records = self.records.write();
        check(
            &entity,
            Others {
                records: &*records,
                exclude: entity.id(),
            },
        )?;
        let id = self.resolve_id(&mut entity)?;
        records.insert(id, entity.clone());
        Ok(entity)
    }

    fn update_checked<E, F>(&self, id: T::Id, apply: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut T, Others<'_, T>) -> Result<(), E>,
    {
        let mut records = self.records.write();
        let Some(mut updated) = records.get(&id).cloned() else {
            return Ok(None);
        };
        apply(
            &mut updated,
            Others {
                records: &*records,
                exclude: Some(id),
            },
        )?;
        // The identifier is owned by the store; patches cannot move a record.
        updated.assign_id(id);
        records.insert(id, updated.clone());
        Ok(Some(updated))
    }
}

impl<T: Entity, R: Repository<T>> Repository<T> for Arc<R> {
    fn find_all(&self) -> Vec<T> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: T::Id) -> Option<T> {
        (**self).find_by_id(id)
    }

    fn save(&self, entity: T) -> RepoResult<T> {
        (**self).save(entity)
    }

    fn delete_by_id(&self, id: T::Id) -> bool {
        (**self).delete_by_id(id)
    }

    fn exists_by_id(&self, id: T::Id) -> bool {
        (**self).exists_by_id(id)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn find_matching(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        (**self).find_matching(predicate)
    }

    fn find_first(&self, predicate: &dyn Fn(&T) -> bool) -> Option<T> {
        (**self).find_first(predicate)
    }

    fn insert_checked<E, F>(&self, entity: T, check: F) -> Result<T, E>
    where
        E: From<RepoError>,
        F: FnOnce(&T, Others<'_, T>) -> Result<(), E>,
    {
        (**self).insert_checked(entity, check)
    }

    fn update_checked<E, F>(&self, id: T::Id, apply: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut T, Others<'_, T>) -> Result<(), E>,
    {
        (**self).update_checked(id, apply)
    }
}
