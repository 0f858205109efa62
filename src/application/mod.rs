//! Application layer services implementing the domain operations.
//!
//! Services consume repository traits injected at construction time and
//! expose one method per operation for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User creation and listing
//! - [`services::school_service::SchoolService`] - Students, courses and enrollments

pub mod services;
