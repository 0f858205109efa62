//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{SchoolService, UserService};
use crate::domain::repositories::{CourseRepository, StudentRepository, UserRepository};
use crate::infrastructure::persistence::{
    PgCourseRepository, PgStudentRepository, PgUserRepository,
};

/// Application state cloned into each request.
///
/// Holds only `Arc`s; there is no shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub school_service: Arc<SchoolService>,
    /// Used by the health check only.
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Builds the state from explicit repository implementations.
    pub fn new(
        pool: Arc<PgPool>,
        user_repository: Arc<dyn UserRepository>,
        student_repository: Arc<dyn StudentRepository>,
        course_repository: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            school_service: Arc::new(SchoolService::new(student_repository, course_repository)),
            pool,
        }
    }

    /// Builds the state wired to the PostgreSQL repositories.
    pub fn with_postgres(pool: Arc<PgPool>) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgStudentRepository::new(pool.clone())),
            Arc::new(PgCourseRepository::new(pool)),
        )
    }
}
