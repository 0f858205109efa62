//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the email is already taken.
    /// Returns [`StoreError::Database`] on other database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<User>, StoreError>;
}
