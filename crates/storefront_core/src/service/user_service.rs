//! User use-case service.
//!
//! # Responsibility
//! - Validate user payloads before any repository write.
//! - Enforce case-insensitive email uniqueness across live users.
//!
//! # Invariants
//! - Uniqueness checks run inside the repository write section, so two
//!   concurrent creates can never both claim the same email.
//! - Updates use partial-patch semantics; blank fields keep prior values.

use crate::model::user::{NewUser, User, UserId, UserPatch};
use crate::model::validation::ValidationError;
use crate::repo::memory_repo::{Others, Repository};
use crate::repo::queries::UserQueries;
use crate::service::error::{
    log_storage_failure, missing, reject, ServiceError, ServiceResult,
};
use log::info;

/// User service facade over a repository implementation.
pub struct UserService<R: Repository<User>> {
    repo: R,
}

impl<R: Repository<User>> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.repo.find_all()
    }

    /// Gets one user by identifier.
    ///
    /// # Errors
    /// - `NotFound` when no user has `id`.
    pub fn get_user_by_id(&self, id: UserId) -> ServiceResult<User> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| missing::<User>("user_get", id))
    }

    /// Case-insensitive email lookup; absence is not an error.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.repo.find_by_email(email)
    }

    pub fn get_users_by_role(&self, role: &str) -> Vec<User> {
        self.repo.find_by_role(role)
    }

    /// Creates one user.
    ///
    /// # Contract
    /// - `name` and `email` must be non-blank.
    /// - `email` must not belong to any existing user (case-insensitive).
    /// - Blank or absent `role` becomes `USER`.
    pub fn create_user(&self, payload: NewUser) -> ServiceResult<User> {
        let user = payload
            .into_user()
            .map_err(|err| reject("user_create", err))?;

        let created = self
            .repo
            .insert_checked(user, |candidate, others| {
                ensure_email_free(candidate.email.as_str(), &others)
                    .map_err(|err| reject("user_create", err))
            })
            .map_err(|err: ServiceError| log_storage_failure("user_create", err))?;

        info!(
            "event=user_create module=service status=ok id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    /// Applies a partial update to an existing user.
    ///
    /// # Contract
    /// - Only non-blank patch fields overwrite stored values.
    /// - A changed email is checked against other users only.
    /// - The stored record is untouched when any check fails.
    pub fn update_user(&self, id: UserId, patch: &UserPatch) -> ServiceResult<User> {
        let updated = self
            .repo
            .update_checked(id, |user, others| {
                if let Some(email) = patch.email_change(user) {
                    ensure_email_free(email, &others)?;
                }
                patch.apply_to(user);
                Ok::<(), ValidationError>(())
            })
            .map_err(|err| reject("user_update", err))?
            .ok_or_else(|| missing::<User>("user_update", id))?;

        info!("event=user_update module=service status=ok id={id}");
        Ok(updated)
    }

    /// Deletes one user by identifier.
    ///
    /// # Errors
    /// - `NotFound` when no user has `id`.
    pub fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        if !self.repo.delete_by_id(id) {
            return Err(missing::<User>("user_delete", id));
        }
        info!("event=user_delete module=service status=ok id={id}");
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.repo.count()
    }
}

fn ensure_email_free(email: &str, others: &Others<'_, User>) -> Result<(), ValidationError> {
    match others.find(|user| user.has_email(email)) {
        Some(_) => Err(ValidationError::DuplicateEmail(email.to_string())),
        None => Ok(()),
    }
}
