//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::{Course, NewCourse};

/// Request body for `POST /api/school/courses`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Database System")]
    pub title: String,

    #[validate(length(min = 1, max = 50))]
    #[schema(example = "CS202")]
    pub code: String,

    #[schema(example = "Introduction to relational databases")]
    pub description: Option<String>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        NewCourse {
            title: req.title,
            code: req.code,
            description: req.description,
        }
    }
}

/// A course as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Web Programming")]
    pub title: String,
    #[schema(example = "CS101")]
    pub code: String,
    pub description: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        CourseResponse {
            id: c.id,
            title: c.title,
            code: c.code,
            description: c.description,
        }
    }
}

/// Response for `DELETE /api/school/courses/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteCourseResponse {
    #[schema(example = "Course deleted successfully")]
    pub message: String,
}
