//! User service - Handles user-related business logic.
//!
//! Every operation is a straight delegation to the repository plus the
//! mapping of "nothing found" and "nothing saved" into `AppError`s.
//! Repository failures are passed through untouched.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{CreateUser, UpdateUser, User, UserDraft, CREATE_USER_FAILED};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all stored users
    async fn find_all_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn find_user_by_id(&self, id: &str) -> AppResult<User>;

    /// Create and persist a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Update an existing user, returning it with the changes applied
    async fn update_user(&self, id: &str, changes: UpdateUser) -> AppResult<User>;

    /// Delete an existing user. `false` when the store removed nothing.
    async fn delete_user(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        let users = self.repo.find().await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn find_user_by_id(&self, id: &str) -> AppResult<User> {
        match self.repo.find_one(id).await? {
            Some(user) => Ok(user),
            None => {
                warn!(user_id = %id, "User not found");
                Err(AppError::user_not_found(id))
            }
        }
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let entity = self.repo.create(UserDraft::from(input));

        match self.repo.save(entity).await? {
            Some(saved) => {
                debug!(user_id = %saved.id, "Created user");
                Ok(saved)
            }
            None => {
                warn!("User save returned nothing");
                Err(AppError::internal(CREATE_USER_FAILED))
            }
        }
    }

    async fn update_user(&self, id: &str, changes: UpdateUser) -> AppResult<User> {
        // Absent ids stop here, before anything is written
        let existing = self.find_user_by_id(id).await?;

        // Normalize first so the row and the returned user share one `updated_at`
        let updated = self.repo.create(UserDraft::from(existing).merge(changes.clone()));

        let affected = self.repo.update(id, &changes, updated.updated_at).await?;
        if affected == 0 {
            warn!(user_id = %id, "User disappeared before update");
            return Err(AppError::user_not_found(id));
        }

        debug!(user_id = %id, "Updated user");
        Ok(updated)
    }

    async fn delete_user(&self, id: &str) -> AppResult<bool> {
        self.find_user_by_id(id).await?;

        let affected = self.repo.delete(id).await?;
        debug!(user_id = %id, affected, "Deleted user");
        Ok(affected > 0)
    }
}
