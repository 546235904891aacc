//! Handlers for the `/volunteers` resource: the caller's own profile.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use voluntech_core::roles::Permission;
use voluntech_core::volunteer::{normalize_specialties, Modality};
use voluntech_db::models::volunteer::{UpdateVolunteer, Volunteer};
use voluntech_db::repositories::VolunteerRepo;

use super::resolve_volunteer;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /volunteers/me`.
#[derive(Debug, Deserialize)]
pub struct UpdateVolunteerRequest {
    pub specialties: Option<Vec<String>>,
    pub modality: Option<String>,
}

/// GET /api/volunteers/me
pub async fn get_me(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<Volunteer>> {
    user.require(Permission::ManageVolunteerProfile)?;
    Ok(Json(resolve_volunteer(&state.pool, &user).await?))
}

/// PUT /api/volunteers/me
pub async fn update_me(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateVolunteerRequest>,
) -> AppResult<Json<Volunteer>> {
    user.require(Permission::ManageVolunteerProfile)?;
    let volunteer = resolve_volunteer(&state.pool, &user).await?;

    let modality = input
        .modality
        .as_deref()
        .map(str::parse::<Modality>)
        .transpose()?;

    let update = UpdateVolunteer {
        specialties: input.specialties.as_deref().map(normalize_specialties),
        modality: modality.map(|m| m.as_str().to_string()),
    };

    let updated = VolunteerRepo::update(&state.pool, volunteer.id, &update)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Volunteer {} vanished during update", volunteer.id))
        })?;

    tracing::info!(volunteer_id = updated.id, modality = %updated.modality, "Volunteer profile updated");
    Ok(Json(updated))
}
