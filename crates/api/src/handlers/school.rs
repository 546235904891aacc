//! Handlers for the `/school` resource.

use axum::extract::State;
use axum::Json;
use voluntech_core::error::{required, CoreError};
use voluntech_core::roles::{Permission, Role};
use voluntech_core::types::DbId;
use voluntech_db::models::school::{School, SchoolWithOwner, UpdateSchool};
use voluntech_db::repositories::SchoolRepo;

use super::resolve_school;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/school/{id}
pub async fn get_by_id(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<SchoolWithOwner>> {
    user.require(Permission::ViewSchool)?;
    ensure_own_school(&state, &user, id).await?;

    SchoolRepo::find_with_owner(&state.pool, id)
        .await?
        .map(Json)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "School", id }))
}

/// PUT /api/school/{id}
///
/// Partial update; omitted fields keep their value.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateSchool>,
) -> AppResult<Json<School>> {
    user.require(Permission::UpdateSchool)?;
    ensure_own_school(&state, &user, id).await?;

    let input = UpdateSchool {
        school_name: non_blank(input.school_name, "school_name")?,
        contact_person: non_blank(input.contact_person, "contact_person")?,
        phone: input.phone.map(|p| p.trim().to_string()),
    };

    let school = SchoolRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "School", id }))?;

    tracing::info!(school_id = id, user_id = user.user_id, "School updated");
    Ok(Json(school))
}

/// School accounts may only address their own profile.
async fn ensure_own_school(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<()> {
    if user.role != Role::School {
        return Ok(());
    }
    let own = resolve_school(&state.pool, user).await?;
    if own.id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only access your own school".into(),
        )));
    }
    Ok(())
}

/// A provided field must not be blank.
fn non_blank(value: Option<String>, field: &str) -> Result<Option<String>, CoreError> {
    value
        .map(|v| required(Some(v.as_str()), field).map(str::to_string))
        .transpose()
}
