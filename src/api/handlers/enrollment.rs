//! Handler for the enrollment endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::enrollment::{EnrollRequest, EnrollResponse};
use crate::api::extractors::extract_validated_json;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Enrolls a student in a course.
///
/// # Endpoint
///
/// `POST /api/school/enroll`
///
/// Enrolling twice in the same course is accepted and leaves a single
/// enrollment.
///
/// # Errors
///
/// Returns 400 if the body is malformed.
/// Returns 500 if the student or course does not exist.
#[utoipa::path(
    post,
    path = "/api/school/enroll",
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Enrolled successfully", body = EnrollResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Cannot enroll student", body = ErrorBody),
    ),
    tag = "Enrollment"
)]
pub async fn enroll_handler(
    State(state): State<AppState>,
    body: Result<Json<EnrollRequest>, JsonRejection>,
) -> Result<Json<EnrollResponse>, AppError> {
    let payload = extract_validated_json(body)?;

    let student = state
        .school_service
        .enroll_student(payload.student_id, payload.course_id)
        .await?;

    Ok(Json(EnrollResponse {
        message: "Enrolled successfully".to_string(),
        student: student.into(),
    }))
}
