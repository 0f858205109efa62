//! Domain entity representing a student and their enrolled courses.

use chrono::{DateTime, Utc};

use super::Course;

/// A student together with the courses they are enrolled in.
///
/// `courses` is populated whenever the student is read back from the store,
/// so a freshly created student carries an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub courses: Vec<Course>,
}

impl Student {
    /// Creates a new Student instance.
    pub fn new(
        id: i64,
        name: String,
        email: String,
        created_at: DateTime<Utc>,
        courses: Vec<Course>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
            courses,
        }
    }

    /// Returns true if the student is enrolled in the given course.
    pub fn is_enrolled_in(&self, course_id: i64) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }
}

/// Input data for creating a new student.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, code: &str) -> Course {
        Course::new(id, format!("Course {id}"), code.to_string(), None)
    }

    #[test]
    fn test_student_creation_without_courses() {
        let student = Student::new(
            1,
            "Nguyen Van A".to_string(),
            "a@test.com".to_string(),
            Utc::now(),
            Vec::new(),
        );

        assert_eq!(student.name, "Nguyen Van A");
        assert!(student.courses.is_empty());
        assert!(!student.is_enrolled_in(1));
    }

    #[test]
    fn test_is_enrolled_in() {
        let student = Student::new(
            1,
            "Nguyen Van A".to_string(),
            "a@test.com".to_string(),
            Utc::now(),
            vec![course(2, "CS101"), course(5, "CS202")],
        );

        assert!(student.is_enrolled_in(2));
        assert!(student.is_enrolled_in(5));
        assert!(!student.is_enrolled_in(3));
    }
}
