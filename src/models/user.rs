use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Database-assigned identifier, immutable after creation.
    pub id: i32,
    pub name: String,
    /// Unique across all users.
    pub email: String,
}

/// Input for creating a user; the id is assigned by the database.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update set; `None` leaves the stored field untouched.
#[derive(Clone, Debug, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}
