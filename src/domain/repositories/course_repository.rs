//! Repository trait for courses.

use crate::domain::entities::{Course, NewCourse};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for courses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Inserts a new course.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the course code is already taken.
    /// Returns [`StoreError::Database`] on other database errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, StoreError>;

    /// Deletes a course together with its enrollments.
    ///
    /// Returns `false` if no course with this id exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
