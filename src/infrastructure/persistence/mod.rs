//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx. Driver
//! errors are converted into [`crate::domain::repositories::StoreError`] by the
//! `From<sqlx::Error>` impl in [`store_error`].
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage
//! - [`PgStudentRepository`] - Students and enrollments
//! - [`PgCourseRepository`] - Courses

pub mod pg_course_repository;
pub mod pg_student_repository;
pub mod pg_user_repository;
pub mod store_error;

pub use pg_course_repository::PgCourseRepository;
pub use pg_student_repository::PgStudentRepository;
pub use pg_user_repository::PgUserRepository;
