//! Student, course and enrollment service.

use std::sync::Arc;

use crate::domain::entities::{Course, NewCourse, NewStudent, Student};
use crate::domain::repositories::{CourseRepository, StudentRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for the school domain: students, courses and enrollments.
///
/// Every operation issues exactly one repository call. Uniqueness checks and
/// referential integrity are left to the store.
pub struct SchoolService {
    student_repository: Arc<dyn StudentRepository>,
    course_repository: Arc<dyn CourseRepository>,
}

impl SchoolService {
    /// Creates a new school service.
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        course_repository: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            student_repository,
            course_repository,
        }
    }

    /// Creates a student. The returned student has no courses yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_student(&self, new_student: NewStudent) -> Result<Student, AppError> {
        Ok(self.student_repository.create(new_student).await?)
    }

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the course code is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_course(&self, new_course: NewCourse) -> Result<Course, AppError> {
        Ok(self.course_repository.create(new_course).await?)
    }

    /// Enrolls a student in a course and returns the student with all of
    /// their courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either id does not exist or on
    /// database errors.
    pub async fn enroll_student(&self, student_id: i64, course_id: i64) -> Result<Student, AppError> {
        let student = self.student_repository.enroll(student_id, course_id).await?;
        tracing::info!(student_id, course_id, "Student enrolled");
        Ok(student)
    }

    /// Fetches a student with the courses they are enrolled in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no student has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_student_transcript(&self, student_id: i64) -> Result<Student, AppError> {
        self.student_repository
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": student_id })))
    }

    /// Deletes a course. Enrollments in the course go with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_course(&self, course_id: i64) -> Result<(), AppError> {
        let deleted = self.course_repository.delete(course_id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Course not found",
                json!({ "id": course_id }),
            ));
        }

        tracing::info!(course_id, "Course deleted");
        Ok(())
    }
}
