//! Business logic services for the application layer.

pub mod school_service;
pub mod user_service;

pub use school_service::SchoolService;
pub use user_service::UserService;
