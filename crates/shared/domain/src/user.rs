//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier assigned by the persistence layer
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

/// User update data transfer object. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
}

impl UpdateUser {
    /// Patch that only renames the user
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: None,
        }
    }
}

/// User fields that have not been persisted yet.
///
/// The repository turns a draft into a full [`User`], assigning whatever
/// the draft leaves open (id, creation time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDraft {
    /// Overlay the fields set in `changes`
    pub fn merge(mut self, changes: UpdateUser) -> Self {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        self
    }
}

impl From<CreateUser> for UserDraft {
    fn from(input: CreateUser) -> Self {
        Self {
            id: None,
            name: input.name,
            email: input.email,
            created_at: None,
        }
    }
}

impl From<User> for UserDraft {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name,
            email: user.email,
            created_at: Some(user.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user() -> User {
        let now = Utc::now();
        User {
            id: "1".to_string(),
            name: "Original".to_string(),
            email: "original@example.com".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn draft_from_input_has_no_identity() {
        let draft = UserDraft::from(CreateUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        });

        assert!(draft.id.is_none());
        assert!(draft.created_at.is_none());
        assert_eq!(draft.name, "Ana");
    }

    #[test]
    fn merge_overlays_only_set_fields() {
        let user = stored_user();
        let draft = UserDraft::from(user.clone()).merge(UpdateUser::name("Nome Atualizado"));

        assert_eq!(draft.id.as_deref(), Some("1"));
        assert_eq!(draft.name, "Nome Atualizado");
        assert_eq!(draft.email, user.email);
        assert_eq!(draft.created_at, Some(user.created_at));
    }

    #[test]
    fn empty_patch_keeps_draft() {
        let draft = UserDraft::from(stored_user());
        assert_eq!(draft.clone().merge(UpdateUser::default()), draft);
    }

    #[test]
    fn update_deserializes_partial_json() {
        let patch: UpdateUser = serde_json::from_str(r#"{"name":"Bia"}"#).unwrap();
        assert_eq!(patch, UpdateUser::name("Bia"));
    }
}
