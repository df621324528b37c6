//! User resource handlers: register, list, fetch, update.

use crate::error::{AppError, ErrorBody};
use crate::extractors::JsonBody;
use crate::models::{NewUser, User};
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Public representation of a user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    request_body = NewUser,
    responses(
        (status = 201, description = "User successfully created", body = UserResponse),
        (status = 400, description = "Email already registered or invalid input data", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.facade.register_user(body)?;
    Ok(created(UserResponse::from(user)))
}

/// Get a list of all users.
#[utoipa::path(
    get,
    path = "/api/v1/users/",
    responses(
        (status = 200, description = "List of users retrieved successfully", body = [UserResponse])
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    let users: Vec<UserResponse> = state
        .facade
        .get_all_users()
        .into_iter()
        .map(UserResponse::from)
        .collect();
    tracing::debug!(count = users.len(), "listing users");
    ok(users)
}

/// Get user details by ID.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User details retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .facade
        .get_user(&user_id)
        .ok_or(AppError::NotFound("User"))?;
    Ok(ok(UserResponse::from(user)))
}

/// Update user information.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = NewUser,
    responses(
        (status = 200, description = "User successfully updated", body = UserResponse),
        (status = 400, description = "Email already registered or invalid input data", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .facade
        .update_user(&user_id, body.into())?
        .ok_or(AppError::NotFound("User"))?;
    Ok(ok(UserResponse::from(user)))
}
