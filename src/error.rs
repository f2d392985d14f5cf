use thiserror::Error;

/// Closed set of failures surfaced by the user store and the handlers.
///
/// Handlers match on these variants directly; vendor error codes never
/// leave the storage layer.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Create payload is missing the name or the email.
    #[error("Name and email are required")]
    MissingRequiredFields,

    /// Update payload carries neither a name nor an email.
    #[error("At least one field (name or email) is required to update")]
    NoFieldsToUpdate,

    /// Path id does not parse as an integer.
    #[error("Invalid user ID format: {0}")]
    InvalidUserId(String),

    /// User with the given ID not found.
    #[error("User {0} not found")]
    UserNotFound(i32),

    /// Email is already registered to another user.
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Catch-all for unexpected errors.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
