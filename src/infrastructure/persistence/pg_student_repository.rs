//! PostgreSQL implementation of student repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Course, NewStudent, Student};
use crate::domain::repositories::{StoreError, StudentRepository};
use crate::infrastructure::persistence::pg_course_repository::CourseRow;

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl StudentRow {
    fn into_student(self, courses: Vec<Course>) -> Student {
        Student::new(self.id, self.name, self.email, self.created_at, courses)
    }
}

/// PostgreSQL repository for students and enrollments.
///
/// Students are always loaded together with their courses, ordered by course id.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Loads a student and their courses on an existing connection.
async fn load_student(conn: &mut PgConnection, id: i64) -> Result<Option<Student>, StoreError> {
    let row = sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, name, email, created_at
        FROM students
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let courses = sqlx::query_as::<_, CourseRow>(
        r#"
        SELECT c.id, c.title, c.code, c.description
        FROM courses c
        JOIN enrollments e ON e.course_id = c.id
        WHERE e.student_id = $1
        ORDER BY c.id
        "#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(Some(
        row.into_student(courses.into_iter().map(Course::from).collect()),
    ))
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<Student, StoreError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(new_student.name)
        .bind(new_student.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into_student(Vec::new()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        load_student(&mut *conn, id).await
    }

    async fn enroll(&self, student_id: i64, course_id: i64) -> Result<Student, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Re-enrolling is a no-op; unknown ids fail on the foreign keys.
        sqlx::query(
            r#"
            INSERT INTO enrollments (student_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (student_id, course_id) DO NOTHING
            "#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&mut *tx)
        .await?;

        let student = load_student(&mut *tx, student_id).await?.ok_or_else(|| {
            StoreError::Database(format!("student {student_id} vanished during enrollment"))
        })?;

        tx.commit().await?;
        Ok(student)
    }
}
