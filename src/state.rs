//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned per request via
//! Axum's state extraction. Both fields are cheap to clone: the database
//! connection is a pool handle and the cache is reference counted.

use sea_orm::DatabaseConnection;

use crate::service::cache::ListingCache;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Process-local TTL cache for listing payloads.
    pub cache: ListingCache,
}

impl AppState {
    pub fn new(db: DatabaseConnection, cache: ListingCache) -> Self {
        Self { db, cache }
    }
}
