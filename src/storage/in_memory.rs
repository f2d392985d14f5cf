use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::UserServiceError;
use crate::models::{NewUser, User, UserChanges};
use crate::storage::UserStore;

/// In-memory user store used by the test suite.
///
/// Lock order is always users, then emails, then next_id.
pub struct InMemoryStore {
    users: Mutex<HashMap<i32, User>>,
    emails: Mutex<HashMap<String, i32>>, // email -> user id
    next_id: Mutex<i32>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            users: Mutex::new(HashMap::new()),
            emails: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        let users = self.users.lock().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, UserServiceError> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserServiceError> {
        let mut users = self.users.lock().await;
        let mut emails = self.emails.lock().await;
        if emails.contains_key(&new_user.email) {
            return Err(UserServiceError::EmailAlreadyRegistered(new_user.email));
        }
        let mut next_id = self.next_id.lock().await;
        let id = *next_id;
        *next_id += 1;
        let user = User {
            id,
            name: new_user.name,
            email: new_user.email,
        };
        emails.insert(user.email.clone(), id);
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<User, UserServiceError> {
        let mut users = self.users.lock().await;
        let mut emails = self.emails.lock().await;
        let user = users
            .get_mut(&id)
            .ok_or(UserServiceError::UserNotFound(id))?;
        if let Some(email) = changes.email {
            if let Some(owner) = emails.get(&email) {
                if *owner != id {
                    return Err(UserServiceError::EmailAlreadyRegistered(email));
                }
            }
            emails.remove(&user.email);
            emails.insert(email.clone(), id);
            user.email = email;
        }
        if let Some(name) = changes.name {
            user.name = name;
        }
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i32) -> Result<(), UserServiceError> {
        let mut users = self.users.lock().await;
        let user = users.remove(&id).ok_or(UserServiceError::UserNotFound(id))?;
        self.emails.lock().await.remove(&user.email);
        Ok(())
    }
}
