//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::api::extractors::extract_validated_json;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 if the body is malformed or the email is invalid.
/// Returns 409 if the email is already registered.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 409, description = "Email already in use", body = ErrorBody),
        (status = 500, description = "Server error", body = ErrorBody),
    ),
    tag = "User"
)]
pub async fn create_user_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let payload = extract_validated_json(body)?;

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// An empty store yields `[]`.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 500, description = "Server error", body = ErrorBody),
    ),
    tag = "User"
)]
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.get_all_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
