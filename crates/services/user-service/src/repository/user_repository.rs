//! User repository: the persistence capability the service depends on.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::{UpdateUser, User, UserDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// `create` only normalizes a draft in memory; nothing is written until
/// `save`. The mutating calls report how many rows they touched.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user
    async fn find(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_one(&self, id: &str) -> AppResult<Option<User>>;

    /// Turn a draft into a persistence-ready user (not yet stored)
    fn create(&self, draft: UserDraft) -> User;

    /// Insert or overwrite the user, returning the stored row
    async fn save(&self, user: User) -> AppResult<Option<User>>;

    /// Apply the set fields of `changes` to the user with `id`, stamping
    /// `updated_at` with the given time
    async fn update(
        &self,
        id: &str,
        changes: &UpdateUser,
        updated_at: DateTime<Utc>,
    ) -> AppResult<u64>;

    /// Remove the user with `id`
    async fn delete(&self, id: &str) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_one(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.to_owned()).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    fn create(&self, draft: UserDraft) -> User {
        // Postgres keeps microseconds; stay within what a re-read returns
        let now = Utc::now().trunc_subsecs(6);
        User {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: draft.name,
            email: draft.email,
            created_at: draft.created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    async fn save(&self, entity: User) -> AppResult<Option<User>> {
        let id = entity.id.clone();
        let active = ActiveModel::from(entity);

        let affected = UserEntity::insert(active)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_columns([
                        user::Column::Name,
                        user::Column::Email,
                        user::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        if affected == 0 {
            tracing::warn!(user_id = %id, "Save wrote no rows");
            return Ok(None);
        }

        let stored = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(stored.map(User::from))
    }

    async fn update(
        &self,
        id: &str,
        changes: &UpdateUser,
        updated_at: DateTime<Utc>,
    ) -> AppResult<u64> {
        let mut query = UserEntity::update_many()
            .col_expr(user::Column::UpdatedAt, Expr::value(updated_at));

        if let Some(name) = &changes.name {
            query = query.col_expr(user::Column::Name, Expr::value(name.clone()));
        }
        if let Some(email) = &changes.email {
            query = query.col_expr(user::Column::Email, Expr::value(email.clone()));
        }

        let result = query
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = UserEntity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
