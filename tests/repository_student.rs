mod common;

use sqlx::PgPool;
use std::sync::Arc;
use school_api::domain::entities::NewStudent;
use school_api::domain::repositories::{StoreError, StudentRepository};
use school_api::infrastructure::persistence::PgStudentRepository;

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_student_has_no_courses(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));

    let student = repo
        .create(NewStudent {
            name: "Nguyen Van A".to_string(),
            email: "a@test.com".to_string(),
        })
        .await
        .unwrap();

    assert!(student.id > 0);
    assert_eq!(student.name, "Nguyen Van A");
    assert!(student.courses.is_empty());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_student_duplicate_email(pool: PgPool) {
    common::create_test_student(&pool, "First", "same@test.com").await;
    let repo = PgStudentRepository::new(Arc::new(pool));

    let err = repo
        .create(NewStudent {
            name: "Second".to_string(),
            email: "same@test.com".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_uniqueness_violation());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));

    let student = repo.find_by_id(42).await.unwrap();

    assert!(student.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_find_by_id_returns_only_linked_courses(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let other_id = common::create_test_student(&pool, "Tran Thi B", "b@test.com").await;
    let web = common::create_test_course(&pool, "Web Programming", "CS101").await;
    let db = common::create_test_course(&pool, "Database System", "CS202").await;
    let ai = common::create_test_course(&pool, "Machine Learning", "CS303").await;
    common::create_test_enrollment(&pool, student_id, db).await;
    common::create_test_enrollment(&pool, student_id, web).await;
    common::create_test_enrollment(&pool, other_id, ai).await;

    let repo = PgStudentRepository::new(Arc::new(pool));
    let student = repo.find_by_id(student_id).await.unwrap().unwrap();

    let codes: Vec<&str> = student.courses.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["CS101", "CS202"]);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_enroll_adds_course(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let course_id = common::create_test_course(&pool, "Web Programming", "CS101").await;
    let repo = PgStudentRepository::new(Arc::new(pool));

    let student = repo.enroll(student_id, course_id).await.unwrap();

    assert_eq!(student.id, student_id);
    assert!(student.is_enrolled_in(course_id));
    assert_eq!(student.courses.len(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_enroll_twice_is_noop(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let course_id = common::create_test_course(&pool, "Web Programming", "CS101").await;
    let repo = PgStudentRepository::new(Arc::new(pool.clone()));

    repo.enroll(student_id, course_id).await.unwrap();
    let student = repo.enroll(student_id, course_id).await.unwrap();

    assert_eq!(student.courses.len(), 1);
    assert_eq!(common::count_rows(&pool, "enrollments").await, 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_enroll_unknown_course_is_foreign_key_violation(pool: PgPool) {
    let student_id = common::create_test_student(&pool, "Nguyen Van A", "a@test.com").await;
    let repo = PgStudentRepository::new(Arc::new(pool));

    let err = repo.enroll(student_id, 999).await.unwrap_err();

    assert!(matches!(err, StoreError::ForeignKeyViolation { .. }));
    assert!(!err.is_uniqueness_violation());
}
