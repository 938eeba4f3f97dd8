//! User domain model and write payloads.
//!
//! # Responsibility
//! - Define the stored `User` record.
//! - Turn create/patch payloads into validated record state.
//!
//! # Invariants
//! - `name` and `email` are never blank once stored.
//! - `role` falls back to `DEFAULT_ROLE` when not supplied.
//! - Email comparison is case-insensitive everywhere.
//!
//! Email uniqueness spans all records, so it is enforced by the service
//! inside the repository write section rather than here.

use crate::model::entity::{Entity, EntityId};
use crate::model::validation::{non_blank, ValidationError};
use serde::{Deserialize, Serialize};

/// Identifier of a stored user.
pub type UserId = EntityId;

/// Role assigned when a create payload omits one.
pub const DEFAULT_ROLE: &str = "USER";

/// Role granted elevated access in the sample data set.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// `None` until the repository assigns one.
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    /// Builds an unsaved user without validation.
    ///
    /// Service write paths go through `NewUser` instead; this constructor is
    /// meant for seeding and repository-level callers.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Returns whether this user's email equals `email`, ignoring case.
    pub fn has_email(&self, email: &str) -> bool {
        eq_ignore_case(self.email.as_str(), email.trim())
    }

    /// Returns whether this user's role equals `role`, ignoring case.
    pub fn has_role(&self, role: &str) -> bool {
        eq_ignore_case(self.role.as_str(), role.trim())
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn assign_id(&mut self, id: UserId) {
        self.id = Some(id);
    }
}

/// Create payload for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Validates field-level rules and builds an unsaved user.
    ///
    /// # Errors
    /// - `BlankName` / `BlankEmail` when the field is absent or blank.
    pub fn into_user(self) -> Result<User, ValidationError> {
        let name = non_blank(self.name.as_deref())
            .ok_or(ValidationError::BlankName {
                entity: User::KIND,
            })?
            .to_string();
        let email = non_blank(self.email.as_deref())
            .ok_or(ValidationError::BlankEmail)?
            .to_string();
        let role = non_blank(self.role.as_deref())
            .unwrap_or(DEFAULT_ROLE)
            .to_string();

        Ok(User {
            id: None,
            name,
            email,
            role,
        })
    }
}

/// Partial update payload for a user.
///
/// `None` and blank strings both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserPatch {
    /// Returns the email this patch would switch to, if it changes it.
    ///
    /// A case-only change of the user's own email is still a change, but can
    /// never conflict with the user itself.
    pub fn email_change<'a>(&'a self, current: &User) -> Option<&'a str> {
        non_blank(self.email.as_deref()).filter(|email| *email != current.email)
    }

    /// Overwrites the supplied non-blank fields on `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = non_blank(self.name.as_deref()) {
            user.name = name.to_string();
        }
        if let Some(email) = self.email_change(user) {
            user.email = email.to_string();
        }
        if let Some(role) = non_blank(self.role.as_deref()) {
            user.role = role.to_string();
        }
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{NewUser, User, UserPatch, DEFAULT_ROLE};
    use crate::model::validation::ValidationError;

    #[test]
    fn into_user_defaults_blank_role() {
        let user = NewUser::new("Ann", "ann@example.com")
            .with_role("   ")
            .into_user()
            .expect("payload should validate");
        assert_eq!(user.role, DEFAULT_ROLE);
        assert_eq!(user.id, None);
    }

    #[test]
    fn into_user_rejects_blank_email() {
        let err = NewUser::new("Ann", " ").into_user().unwrap_err();
        assert_eq!(err, ValidationError::BlankEmail);
    }

    #[test]
    fn has_email_ignores_case_and_padding() {
        let user = User::new("Ann", "Ann@Example.com", "USER");
        assert!(user.has_email(" ann@example.COM "));
        assert!(!user.has_email("ann@example.org"));
    }

    #[test]
    fn patch_skips_blank_fields() {
        let mut user = User::new("Ann", "ann@example.com", "USER");
        let patch = UserPatch {
            name: Some(String::new()),
            email: None,
            role: Some("ADMIN".to_string()),
        };
        patch.apply_to(&mut user);
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.role, "ADMIN");
    }
}
