//! Route definitions for the `/volunteers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::volunteer;
use crate::state::AppState;

/// Routes mounted at `/volunteers`.
///
/// ```text
/// GET /me  -> get_me
/// PUT /me  -> update_me
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(volunteer::get_me).put(volunteer::update_me))
}
