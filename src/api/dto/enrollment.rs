//! DTOs for the enrollment endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::student::StudentResponse;

/// Request body for `POST /api/school/enroll`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    #[validate(range(min = 1))]
    #[schema(example = 1)]
    pub student_id: i64,

    #[validate(range(min = 1))]
    #[schema(example = 2)]
    pub course_id: i64,
}

/// Response for a successful enrollment.
#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollResponse {
    #[schema(example = "Enrolled successfully")]
    pub message: String,
    pub student: StudentResponse,
}
