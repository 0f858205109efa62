//! Handlers for course endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::course::{CourseResponse, CreateCourseRequest, DeleteCourseResponse};
use crate::api::extractors::{extract_path, extract_validated_json};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Creates a course.
///
/// # Endpoint
///
/// `POST /api/school/courses`
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if the course code is already in use.
#[utoipa::path(
    post,
    path = "/api/school/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Course code already in use", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody),
    ),
    tag = "Course"
)]
pub async fn create_course_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateCourseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    let payload = extract_validated_json(body)?;

    let course = state.school_service.create_course(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

/// Deletes a course.
///
/// # Endpoint
///
/// `DELETE /api/school/courses/{id}`
///
/// Enrollments in the course are removed with it. No check is made for
/// enrolled students beforehand.
///
/// # Errors
///
/// Returns 404 if the course does not exist.
#[utoipa::path(
    delete,
    path = "/api/school/courses/{id}",
    params(("id" = i64, Path, description = "Course ID", example = 2)),
    responses(
        (status = 200, description = "Course deleted", body = DeleteCourseResponse),
        (status = 400, description = "Invalid course id", body = ErrorBody),
        (status = 404, description = "Course not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody),
    ),
    tag = "Course"
)]
pub async fn delete_course_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteCourseResponse>, AppError> {
    let id = extract_path(id)?;

    state.school_service.delete_course(id).await?;

    Ok(Json(DeleteCourseResponse {
        message: "Course deleted successfully".to_string(),
    }))
}
