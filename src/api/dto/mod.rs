//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON (camelCase field names), `validator` for input
//! validation and `utoipa` for the OpenAPI schemas.

pub mod course;
pub mod enrollment;
pub mod health;
pub mod student;
pub mod user;
