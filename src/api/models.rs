use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::UserServiceError;

// Request structs for JSON payloads. Both fields stay optional so a
// missing value surfaces as the canonical 400 body from the handler
// rather than a framework-level reject.
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for UserServiceError to implement IntoResponse
pub struct ApiError(pub UserServiceError);

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            UserServiceError::MissingRequiredFields => (
                StatusCode::BAD_REQUEST,
                "Name and email are required".to_string(),
            ),
            UserServiceError::NoFieldsToUpdate => (
                StatusCode::BAD_REQUEST,
                "At least one field (name or email) is required to update".to_string(),
            ),
            UserServiceError::InvalidUserId(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid user ID format".to_string(),
            ),
            UserServiceError::UserNotFound(_) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            UserServiceError::EmailAlreadyRegistered(_) => (
                StatusCode::CONFLICT,
                "A user with this email already exists. Email should be unique.".to_string(),
            ),
            UserServiceError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            UserServiceError::Unexpected(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Unexpected error: {}", msg),
            ),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
