//! User service - read-only access to the full set of users.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::repositories::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;
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
    /// Delegates to the store unmodified: no filtering, no transformation,
    /// and store errors surface unchanged to the caller.
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }
}
