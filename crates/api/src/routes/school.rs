//! Route definitions for the `/school` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::school;
use crate::state::AppState;

/// Routes mounted at `/school`.
///
/// ```text
/// GET /{id}  -> get_by_id
/// PUT /{id}  -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(school::get_by_id).put(school::update))
}
