use async_trait::async_trait;

use crate::error::UserServiceError;
use crate::models::{NewUser, User, UserChanges};

/// Typed CRUD operations for the User entity.
///
/// `PgUserStore` talks to PostgreSQL; `InMemoryStore` backs the test
/// suite with the same observable semantics.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns all users ordered by id. An empty store is not an error.
    async fn list_users(&self) -> Result<Vec<User>, UserServiceError>;

    async fn get_user(&self, id: i32) -> Result<Option<User>, UserServiceError>;

    /// Inserts a user and returns it with its database-assigned id.
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserServiceError>;

    /// Applies the given fields to an existing record.
    async fn update_user(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<User, UserServiceError>;

    async fn delete_user(&self, id: i32) -> Result<(), UserServiceError>;
}

pub mod in_memory;
pub mod postgres;
