//! PostgreSQL implementation of course repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Course, NewCourse};
use crate::domain::repositories::{CourseRepository, StoreError};

#[derive(sqlx::FromRow)]
pub(crate) struct CourseRow {
    id: i64,
    title: String,
    code: String,
    description: Option<String>,
}

impl From<CourseRow> for Course {
    fn from(r: CourseRow) -> Self {
        Course::new(r.id, r.title, r.code, r.description)
    }
}

/// PostgreSQL repository for courses.
///
/// Deleting a course removes its enrollment rows through `ON DELETE CASCADE`.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, StoreError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (title, code, description)
            VALUES ($1, $2, $3)
            RETURNING id, title, code, description
            "#,
        )
        .bind(new_course.title)
        .bind(new_course.code)
        .bind(new_course.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
