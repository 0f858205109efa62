//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for creating and listing users.
///
/// Both operations pass straight through to the repository; store failures
/// are classified by the [`From<StoreError>`](crate::domain::repositories::StoreError)
/// conversion into [`AppError`].
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Returns all users in insertion order. No pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repository.list().await?)
    }
}
