#![allow(dead_code)]

use axum_test::TestServer;
use school_api::routes::app_router;
use school_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_student(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_course(pool: &PgPool, title: &str, code: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO courses (title, code) VALUES ($1, $2) RETURNING id")
        .bind(title)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_enrollment(pool: &PgPool, student_id: i64, course_id: i64) {
    sqlx::query("INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)")
        .bind(student_id)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::with_postgres(Arc::new(pool))
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    let app = app_router(create_test_state(pool), "http://localhost:3001");
    TestServer::new(app).unwrap()
}
