mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_student_then_enroll(pool: PgPool) {
    let course_id = common::create_test_course(&pool, "Web Programming", "CS101").await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/school/students")
        .json(&json!({ "name": "Nguyen Van A", "email": "a@test.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let student = response.json::<Value>();
    assert_eq!(student["courses"], json!([]));
    let student_id = student["id"].as_i64().unwrap();

    let response = server
        .post("/api/school/enroll")
        .json(&json!({ "studentId": student_id, "courseId": course_id }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Enrolled successfully");
    assert_eq!(json["student"]["id"], student_id);
    assert_eq!(json["student"]["courses"][0]["id"], course_id);
    assert_eq!(json["student"]["courses"][0]["code"], "CS101");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_student_duplicate_email_conflict(pool: PgPool) {
    common::create_test_student(&pool, "First", "a@test.com").await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/school/students")
        .json(&json!({ "name": "Second", "email": "a@test.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_student_transcript(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let course_id = common::create_test_course(&pool, "Database System", "CS202").await;
    common::create_test_course(&pool, "Machine Learning", "CS303").await;
    common::create_test_enrollment(&pool, student_id, course_id).await;
    let server = common::create_test_server(pool);

    let response = server
        .get(&format!("/api/school/students/{student_id}"))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Nguyen Van A");
    let courses = json["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["code"], "CS202");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_student_transcript_not_found(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/school/students/999").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Student not found");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_course_success(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/school/courses")
        .json(&json!({ "title": "Database System", "code": "CS202" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["title"], "Database System");
    assert_eq!(json["code"], "CS202");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_course_duplicate_code_conflict(pool: PgPool) {
    common::create_test_course(&pool, "Database System", "CS202").await;
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/school/courses")
        .json(&json!({ "title": "Another", "code": "CS202" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"]["details"]["constraint"],
        "courses_code_key"
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_delete_course_removes_it_from_transcript(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let course_id = common::create_test_course(&pool, "Web Programming", "CS101").await;
    common::create_test_enrollment(&pool, student_id, course_id).await;
    let server = common::create_test_server(pool);

    let response = server
        .delete(&format!("/api/school/courses/{course_id}"))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Course deleted successfully"
    );

    let transcript = server
        .get(&format!("/api/school/students/{student_id}"))
        .await
        .json::<Value>();
    assert_eq!(transcript["courses"], json!([]));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_delete_course_not_found(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.delete("/api/school/courses/999").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Course not found"
    );
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_enroll_unknown_course_internal_error(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/api/school/enroll")
        .json(&json!({ "studentId": student_id, "courseId": 999 }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["code"], "internal_error");
    assert_eq!(common::count_rows(&pool, "enrollments").await, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_enroll_twice_keeps_single_course(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let course_id = common::create_test_course(&pool, "Web Programming", "CS101").await;
    let server = common::create_test_server(pool);
    let body = json!({ "studentId": student_id, "courseId": course_id });

    server.post("/api/school/enroll").json(&body).await.assert_status_ok();
    let response = server.post("/api/school/enroll").json(&body).await;

    response.assert_status_ok();
    let courses = response.json::<Value>()["student"]["courses"]
        .as_array()
        .unwrap()
        .len();
    assert_eq!(courses, 1);
}
