//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /              -> list (?schoolId=)
/// POST /              -> create
/// GET  /{id}          -> get_by_id
/// PUT  /{id}/reserve  -> reserve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/reserve", put(project::reserve))
}
