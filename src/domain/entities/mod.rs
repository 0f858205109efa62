//! Core domain entities representing the school data model.
//!
//! Entities are plain data structures without transport or storage concerns.
//!
//! # Entity Types
//!
//! - [`User`] - An API user
//! - [`Student`] - A student with the courses they are enrolled in
//! - [`Course`] - A course students can enroll in
//!
//! Creation inputs use separate structs: `NewUser`, `NewStudent`, `NewCourse`.
//! Enrollment has no entity of its own; it surfaces as [`Student::courses`].

pub mod course;
pub mod student;
pub mod user;

pub use course::{Course, NewCourse};
pub use student::{NewStudent, Student};
pub use user::{NewUser, User};
