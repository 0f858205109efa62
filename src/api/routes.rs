//! API route configuration.
//!
//! There is no authentication layer; every route is public.

use crate::api::handlers::{
    create_course_handler, create_student_handler, create_user_handler, delete_course_handler,
    enroll_handler, student_transcript_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// User routes, mounted at the root.
///
/// # Endpoints
///
/// - `POST /users` - Create a user
/// - `GET  /users` - List all users
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(user_list_handler).post(create_user_handler))
}

/// School routes, nested under `/api/school`.
///
/// # Endpoints
///
/// - `POST   /students`      - Create a student
/// - `GET    /students/{id}` - Student with enrolled courses
/// - `POST   /courses`       - Create a course
/// - `DELETE /courses/{id}`  - Delete a course
/// - `POST   /enroll`        - Enroll a student in a course
pub fn school_routes() -> Router<AppState> {
    Router::new()
        .route("/students", post(create_student_handler))
        .route("/students/{id}", get(student_transcript_handler))
        .route("/courses", post(create_course_handler))
        .route("/courses/{id}", delete(delete_course_handler))
        .route("/enroll", post(enroll_handler))
}
