//! Router assembly.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::doc::ApiDoc;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use utoipa::OpenApi;

/// Prefix under which the versioned API is mounted.
pub const API_PREFIX: &str = "/api/v1";

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Full application: common routes at the root, users and the OpenAPI document under [`API_PREFIX`].
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    let api = Router::new()
        .merge(user_routes(state))
        .route("/openapi.json", get(openapi));

    Router::new()
        .merge(common_routes())
        .nest(API_PREFIX, api)
        .layer(DefaultBodyLimit::max(body_limit))
}
