//! Repository trait definitions for the domain layer.
//!
//! These traits are the data-access capability the services consume. They are
//! implemented by PostgreSQL repositories in the infrastructure layer and
//! injected into services as `Arc<dyn Trait>`.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User creation and listing
//! - [`StudentRepository`] - Student creation, lookup and enrollment
//! - [`CourseRepository`] - Course creation and deletion
//!
//! All methods fail with [`StoreError`], which hides the driver behind a
//! store-agnostic classification.
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! `tests/repository_*.rs` for the PostgreSQL integration tests.

pub mod course_repository;
pub mod store_error;
pub mod student_repository;
pub mod user_repository;

pub use course_repository::CourseRepository;
pub use store_error::StoreError;
pub use student_repository::StudentRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
