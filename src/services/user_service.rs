//! User service - Handles user-related use cases.
//!
//! Sits between the HTTP layer and the repository: the repository reports a
//! missing user as `None`, the service turns that into `AppError::NotFound`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Store a new user and return it with its assigned id
    async fn create_user(&self, user: CreateUser) -> AppResult<User>;

    /// Delete user by ID, returning the removed record
    async fn delete_user(&self, id: i32) -> AppResult<User>;
}

/// Concrete implementation of UserService over any repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.repo.find_all())
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .ok_or_else(|| AppError::user_not_found(id))
    }

    async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        let saved = self.repo.save(user);
        tracing::debug!(?saved, "savedUser");
        Ok(saved)
    }

    async fn delete_user(&self, id: i32) -> AppResult<User> {
        let deleted = self
            .repo
            .delete_by_id(id)
            .ok_or_else(|| AppError::user_not_found(id))?;
        tracing::debug!(?deleted, "user deleted");
        Ok(deleted)
    }
}
