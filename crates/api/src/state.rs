use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally and the
/// config sits behind an `Arc`). The pool is created in `main` and closed there
/// after the server drains.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: voluntech_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
