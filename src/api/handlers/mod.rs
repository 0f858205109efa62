//! HTTP request handlers for API endpoints.
//!
//! Each handler extracts its input, calls exactly one service operation and
//! returns either the result or an [`crate::error::AppError`].

pub mod courses;
pub mod enrollment;
pub mod health;
pub mod students;
pub mod users;

pub use courses::{create_course_handler, delete_course_handler};
pub use enrollment::enroll_handler;
pub use health::health_handler;
pub use students::{create_student_handler, student_transcript_handler};
pub use users::{create_user_handler, user_list_handler};
