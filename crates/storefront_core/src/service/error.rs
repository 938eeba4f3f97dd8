//! Error contract shared by the user and product services.

use crate::model::entity::{Entity, EntityId};
use crate::model::validation::ValidationError;
use crate::repo::memory_repo::RepoError;
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure returned by a service operation.
///
/// A failed operation never leaves a partial write behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Referenced record does not exist.
    NotFound { entity: &'static str, id: EntityId },
    /// Payload violates an entity invariant.
    InvalidArgument(ValidationError),
    /// Store could not complete the write.
    Storage(RepoError),
}

impl ServiceError {
    pub fn not_found<T: Entity>(id: T::Id) -> Self {
        Self::NotFound {
            entity: T::KIND,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found with id: {id}"),
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Logs a rejected payload and converts it into a service error.
///
/// Only the error code is logged; payload values may carry user data.
pub(crate) fn reject(event: &str, err: ValidationError) -> ServiceError {
    warn!(
        "event={} module=service status=rejected error_code={}",
        event,
        err.code()
    );
    ServiceError::InvalidArgument(err)
}

/// Logs a lookup miss and builds the matching `NotFound` error.
pub(crate) fn missing<T: Entity>(event: &str, id: T::Id) -> ServiceError {
    warn!(
        "event={} module=service status=not_found entity={} id={}",
        event,
        T::KIND,
        id
    );
    ServiceError::not_found::<T>(id)
}

/// Logs a storage failure attached to `event`; other errors pass through.
pub(crate) fn log_storage_failure(event: &str, err: ServiceError) -> ServiceError {
    if let ServiceError::Storage(cause) = &err {
        error!(
            "event={} module=service status=error error={}",
            event, cause
        );
    }
    err
}
