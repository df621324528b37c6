//! User resource routes. The collection answers with and without a trailing slash.

use crate::handlers::users::{create_user, get_user, list_users, update_user};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:user_id", get(get_user).put(update_user))
        .with_state(state)
}
