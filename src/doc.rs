//! OpenAPI document for the REST API, served at `/api/v1/openapi.json`.

use crate::error::ErrorBody;
use crate::handlers::users::UserResponse;
use crate::models::NewUser;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HBnB API",
        description = "In-memory REST interface for users of the HBnB rental domain."
    ),
    paths(
        crate::handlers::users::create_user,
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
    ),
    components(schemas(NewUser, UserResponse, ErrorBody)),
    tags((name = "users", description = "User operations"))
)]
pub struct ApiDoc;
