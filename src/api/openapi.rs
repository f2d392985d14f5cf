use utoipa::OpenApi;

use crate::api::models::{CreateUserRequest, ErrorResponse, UpdateUserRequest};
use crate::models::User;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::create_user,
        super::handlers::update_user,
        super::handlers::delete_user
    ),
    components(schemas(CreateUserRequest, UpdateUserRequest, ErrorResponse, User)),
    info(
        title = "User CRUD API",
        description = "API for managing users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
