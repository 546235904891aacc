//! Route definitions for the `/availability` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::availability;
use crate::state::AppState;

/// Routes mounted at `/availability`.
///
/// ```text
/// POST   /                          -> create
/// GET    /my                        -> list_my
/// GET    /available                 -> list_available
/// GET    /public                    -> list_public (no auth)
/// GET    /volunteer/{volunteer_id}  -> list_by_volunteer
/// DELETE /{id}                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(availability::create))
        .route("/my", get(availability::list_my))
        .route("/available", get(availability::list_available))
        .route("/public", get(availability::list_public))
        .route(
            "/volunteer/{volunteer_id}",
            get(availability::list_by_volunteer),
        )
        .route("/{id}", delete(availability::delete))
}
