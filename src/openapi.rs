//! OpenAPI document and Swagger UI.
//!
//! The document is assembled from the `#[utoipa::path]` annotations on the
//! handlers. Swagger UI is served at `/api-docs`, the raw JSON at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;
use utoipa::openapi::ServerBuilder;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::course::{CourseResponse, CreateCourseRequest, DeleteCourseResponse};
use crate::api::dto::enrollment::{EnrollRequest, EnrollResponse};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::api::dto::student::{CreateStudentRequest, StudentResponse};
use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::error::{ErrorBody, ErrorInfo};

/// Path under which Swagger UI is mounted.
pub const DOCS_PATH: &str = "/api-docs";

/// Path of the generated OpenAPI JSON document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School & Course API",
        version = "1.0.0",
        description = "API for managing students, courses, enrollments and users"
    ),
    paths(
        crate::api::handlers::users::create_user_handler,
        crate::api::handlers::users::user_list_handler,
        crate::api::handlers::students::create_student_handler,
        crate::api::handlers::students::student_transcript_handler,
        crate::api::handlers::courses::create_course_handler,
        crate::api::handlers::courses::delete_course_handler,
        crate::api::handlers::enrollment::enroll_handler,
        crate::api::handlers::health::health_handler,
    ),
    components(schemas(
        CreateUserRequest,
        UserResponse,
        CreateStudentRequest,
        StudentResponse,
        CreateCourseRequest,
        CourseResponse,
        DeleteCourseResponse,
        EnrollRequest,
        EnrollResponse,
        HealthResponse,
        HealthChecks,
        CheckStatus,
        ErrorBody,
        ErrorInfo,
    )),
    tags(
        (name = "User", description = "User management"),
        (name = "Student", description = "Student management"),
        (name = "Course", description = "Course management"),
        (name = "Enrollment", description = "Course enrollment"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Builds the OpenAPI document with `base_url` as its only server entry.
pub fn openapi(base_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![
        ServerBuilder::new()
            .url(base_url)
            .description(Some("API server"))
            .build(),
    ]);
    doc
}

/// Swagger UI service serving the document for `base_url`.
pub fn swagger_ui(base_url: &str) -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, openapi(base_url))
}
