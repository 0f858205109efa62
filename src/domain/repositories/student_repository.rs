//! Repository trait for students and their enrollments.

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for students.
///
/// Every [`Student`] returned carries its enrolled courses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Inserts a new student.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the email is already taken.
    /// Returns [`StoreError::Database`] on other database errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, StoreError>;

    /// Finds a student by id, including enrolled courses.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError>;

    /// Links a student to a course and returns the updated student.
    ///
    /// Linking an already enrolled pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ForeignKeyViolation`] if either id does not exist.
    /// Returns [`StoreError::Database`] on other database errors.
    async fn enroll(&self, student_id: i64, course_id: i64) -> Result<Student, StoreError>;
}
