//! User repository: CRUD access to persisted user records.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};
use validator::Validate;

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserDraft};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Absence is not an error: `find_by_id` returns `None` and `delete_by_id`
/// is a no-op when the id does not exist.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the draft when it has no id, otherwise replace the record
    /// with that id. Returns the persisted record including its id.
    async fn save(&self, draft: UserDraft) -> AppResult<User>;

    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Fetch the complete set of records, order unspecified
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Remove the record with the given id if present
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by the relational store
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
    async fn save(&self, draft: UserDraft) -> AppResult<User> {
        // Required fields are checked before any database work
        draft.validate()?;

        match draft.id {
            None => {
                let active = ActiveModel {
                    id: NotSet,
                    email: Set(draft.email),
                    password: Set(draft.password),
                    name: Set(draft.name),
                    picture: Set(draft.picture),
                };

                let model = active.insert(&self.db).await?;
                Ok(User::from(model))
            }
            Some(id) => {
                let existing = UserEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(AppError::NotFound)?;

                let mut active: ActiveModel = existing.into();
                active.email = Set(draft.email);
                active.password = Set(draft.password);
                active.name = Set(draft.name);
                active.picture = Set(draft.picture);

                let model = active.update(&self.db).await?;
                Ok(User::from(model))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            tracing::debug!(id, "delete_by_id matched no record");
        }
        Ok(())
    }
}
