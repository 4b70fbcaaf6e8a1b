//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds nothing but the database
//! connection pool; handlers are otherwise stateless.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an established connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
