//! Route definitions for the `/bookings` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /      -> create
/// GET    /my    -> list_my
/// DELETE /{id}  -> cancel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(booking::create))
        .route("/my", get(booking::list_my))
        .route("/{id}", delete(booking::cancel))
}
