//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Handed to every handler. The pool is the only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
