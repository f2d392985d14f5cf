use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use tracing::info;

use crate::api::models::{ApiError, CreateUserRequest, ErrorResponse, UpdateUserRequest};
use crate::error::UserServiceError;
use crate::models::{NewUser, User, UserChanges};
use crate::storage::UserStore;

// Define API routes
pub fn api_routes<S>(store: Arc<S>) -> Router
where
    S: UserStore + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/users", get(list_users::<S>).post(create_user::<S>))
        .route(
            "/users/{id}",
            get(get_user::<S>)
                .put(update_user::<S>)
                .delete(delete_user::<S>),
        )
        .with_state(store)
}

// Root endpoint
async fn welcome() -> &'static str {
    "Welcome to the User CRUD API"
}

fn parse_user_id(raw: &str) -> Result<i32, UserServiceError> {
    raw.parse::<i32>()
        .map_err(|_| UserServiceError::InvalidUserId(raw.to_string()))
}

// Treats absent, `null` and empty-string fields alike.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users<S: UserStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = store.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user<S: UserStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;
    let user = store
        .get_user(id)
        .await?
        .ok_or(UserServiceError::UserNotFound(id))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Name or email missing", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user<S: UserStore>(
    State(store): State<Arc<S>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (name, email) = match (non_empty(req.name), non_empty(req.email)) {
        (Some(name), Some(email)) => (name, email),
        _ => return Err(UserServiceError::MissingRequiredFields.into()),
    };
    let user = store.create_user(NewUser { name, email }).await?;
    info!("Created user {} ({})", user.id, user.email);
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "ID of the user to update")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "No fields to update or malformed id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_user<S: UserStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let id = parse_user_id(&id)?;
    let changes = UserChanges {
        name: non_empty(req.name),
        email: non_empty(req.email),
    };
    if changes.name.is_none() && changes.email.is_none() {
        return Err(UserServiceError::NoFieldsToUpdate.into());
    }
    // Existence pre-check keeps the 404 independent of how the store
    // reports a missing row during the mutation itself.
    store
        .get_user(id)
        .await?
        .ok_or(UserServiceError::UserNotFound(id))?;
    let user = store.update_user(id, changes).await?;
    info!("Updated user {}", user.id);
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user<S: UserStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_user_id(&id)?;
    store
        .get_user(id)
        .await?
        .ok_or(UserServiceError::UserNotFound(id))?;
    store.delete_user(id).await?;
    info!("Deleted user {}", id);
    Ok(StatusCode::NO_CONTENT)
}
