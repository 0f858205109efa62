//! Domain entity representing a course.

/// A course students can enroll in.
///
/// `code` is unique across all courses (e.g. `CS101`).
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub description: Option<String>,
}

impl Course {
    /// Creates a new Course instance.
    pub fn new(id: i64, title: String, code: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            code,
            description,
        }
    }
}

/// Input data for creating a new course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
}
