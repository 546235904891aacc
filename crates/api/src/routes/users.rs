//! Route definitions for the `/users` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /register  -> register (role "user")
/// POST /login     -> same as /auth/login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(auth::login))
}
