mod user_tests;

use std::sync::Arc;

use axum::Router;

use crate::api::handlers::api_routes;
use crate::storage::in_memory::InMemoryStore;

pub fn create_test_store() -> InMemoryStore {
    InMemoryStore::new()
}

pub fn create_test_app() -> Router {
    api_routes(Arc::new(InMemoryStore::new()))
}
