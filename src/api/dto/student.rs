//! DTOs for student endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::course::CourseResponse;
use crate::domain::entities::{NewStudent, Student};

/// Request body for `POST /api/school/students`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Nguyen Van A")]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "a@gmail.com")]
    pub email: String,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        NewStudent {
            name: req.name,
            email: req.email,
        }
    }
}

/// A student with their enrolled courses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Nguyen Van A")]
    pub name: String,
    #[schema(example = "a@gmail.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub courses: Vec<CourseResponse>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        StudentResponse {
            id: s.id,
            name: s.name,
            email: s.email,
            created_at: s.created_at,
            courses: s.courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}
