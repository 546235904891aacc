//! HTTP request handlers.
//!
//! Each submodule serves one resource. Handlers verify identity through the
//! [`AuthUser`] extractor, apply the role gate, then call into the
//! repositories of `voluntech_db`.

pub mod auth;
pub mod availability;
pub mod booking;
pub mod project;
pub mod school;
pub mod users;
pub mod volunteer;

use voluntech_core::error::CoreError;
use voluntech_db::models::school::School;
use voluntech_db::models::volunteer::Volunteer;
use voluntech_db::repositories::{SchoolRepo, VolunteerRepo};
use voluntech_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Load the caller's school profile, or 403 if the account has none.
pub(crate) async fn resolve_school(pool: &DbPool, user: &AuthUser) -> AppResult<School> {
    SchoolRepo::find_by_user_id(pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No school profile is associated with this account".into(),
            ))
        })
}

/// Load the caller's volunteer profile, or 403 if the account has none.
pub(crate) async fn resolve_volunteer(pool: &DbPool, user: &AuthUser) -> AppResult<Volunteer> {
    VolunteerRepo::find_by_user_id(pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "No volunteer profile is associated with this account".into(),
            ))
        })
}
