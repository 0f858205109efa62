//! Handlers for student endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::student::{CreateStudentRequest, StudentResponse};
use crate::api::extractors::{extract_path, extract_validated_json};
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Creates a student.
///
/// # Endpoint
///
/// `POST /api/school/students`
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if the email is already in use.
#[utoipa::path(
    post,
    path = "/api/school/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody),
    ),
    tag = "Student"
)]
pub async fn create_student_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let payload = extract_validated_json(body)?;

    let student = state.school_service.create_student(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Returns a student together with the courses they are enrolled in.
///
/// # Endpoint
///
/// `GET /api/school/students/{id}`
///
/// # Errors
///
/// Returns 404 if the student does not exist.
#[utoipa::path(
    get,
    path = "/api/school/students/{id}",
    params(("id" = i64, Path, description = "Student ID", example = 1)),
    responses(
        (status = 200, description = "Student with enrolled courses", body = StudentResponse),
        (status = 400, description = "Invalid student id", body = ErrorBody),
        (status = 404, description = "Student not found", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody),
    ),
    tag = "Student"
)]
pub async fn student_transcript_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StudentResponse>, AppError> {
    let id = extract_path(id)?;

    let student = state.school_service.get_student_transcript(id).await?;

    Ok(Json(student.into()))
}
