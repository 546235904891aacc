pub mod auth;
pub mod availability;
pub mod booking;
pub mod health;
pub mod project;
pub mod school;
pub mod users;
pub mod volunteer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register with role (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current identity
///
/// /users/register                                  register generic user (public)
/// /users/login                                     login (public)
///
/// /availability                                    create slot (volunteer)
/// /availability/my                                 own slots (volunteer)
/// /availability/available                          open slots, filtered
/// /availability/public                             open slots (public)
/// /availability/volunteer/{volunteer_id}           slots of one volunteer
/// /availability/{id}                               delete slot (owner)
///
/// /bookings                                        book a slot (school)
/// /bookings/my                                     own bookings
/// /bookings/{id}                                   cancel (owning school)
///
/// /projects                                        list, create
/// /projects/{id}                                   get
/// /projects/{id}/reserve                           claim (volunteer)
///
/// /school/{id}                                     get, update
///
/// /volunteers/me                                   get, update own profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/availability", availability::router())
        .nest("/bookings", booking::router())
        .nest("/projects", project::router())
        .nest("/school", school::router())
        .nest("/volunteers", volunteer::router())
}
