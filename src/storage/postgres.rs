use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;

use crate::error::UserServiceError;
use crate::models::{NewUser, User, UserChanges};
use crate::storage::UserStore;

/// PostgreSQL-backed user store.
///
/// Expects a `users` table with a serial `id` primary key and a unique
/// index on `email`; that index is the sole enforcement of the
/// one-email-per-user invariant.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Builds the connection pool without touching the network; the pool
    /// connects on first use.
    pub fn connect_lazy(database_url: &str) -> Result<Self, UserServiceError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)
            .map_err(|e| UserServiceError::Database(e.to_string()))?;
        Ok(PgUserStore { pool })
    }

    /// Round-trips a trivial query to verify connectivity.
    pub async fn ping(&self) -> Result<(), UserServiceError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| UserServiceError::Database(e.to_string()))?;
        Ok(())
    }

    /// Drains pool connections. Called once on graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn storage_error(err: sqlx::Error) -> UserServiceError {
    UserServiceError::Database(err.to_string())
}

/// Translates a unique-index rejection into the typed conflict variant;
/// everything else stays a storage failure.
fn constraint_error(err: sqlx::Error, email: &str) -> UserServiceError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            UserServiceError::EmailAlreadyRegistered(email.to_string())
        }
        _ => storage_error(err),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, UserServiceError> {
        sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserServiceError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| constraint_error(e, &new_user.email))?;
        debug!("User created with ID: {}", user.id);
        Ok(user)
    }

    async fn update_user(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<User, UserServiceError> {
        let email = changes.email.clone().unwrap_or_default();
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), email = COALESCE($3, email) \
             WHERE id = $1 RETURNING id, name, email",
        )
        .bind(id)
        .bind(changes.name)
        .bind(changes.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| constraint_error(e, &email))?;
        updated.ok_or(UserServiceError::UserNotFound(id))
    }

    async fn delete_user(&self, id: i32) -> Result<(), UserServiceError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        if result.rows_affected() == 0 {
            return Err(UserServiceError::UserNotFound(id));
        }
        debug!("User deleted with ID: {}", id);
        Ok(())
    }
}
