//! Handlers for the `/availability` resource (volunteer time slots).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use voluntech_core::availability::{parse_slot, SlotFilter};
use voluntech_core::error::CoreError;
use voluntech_core::roles::Permission;
use voluntech_core::types::DbId;
use voluntech_db::models::availability::{Availability, CreateAvailability, PublicSlot};
use voluntech_db::repositories::{AvailabilityRepo, SlotDeletion};

use super::resolve_volunteer;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /availability`.
#[derive(Debug, Deserialize)]
pub struct CreateSlotRequest {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Query parameters for `GET /availability/available`.
#[derive(Debug, Default, Deserialize)]
pub struct SlotQuery {
    pub specialty: Option<String>,
    pub modality: Option<String>,
    pub date: Option<String>,
}

/// POST /api/availability
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateSlotRequest>,
) -> AppResult<(StatusCode, Json<Availability>)> {
    user.require(Permission::CreateAvailability)?;
    let volunteer = resolve_volunteer(&state.pool, &user).await?;

    let window = parse_slot(
        input.date.as_deref(),
        input.start_time.as_deref(),
        input.end_time.as_deref(),
    )?;

    let slot = AvailabilityRepo::create(
        &state.pool,
        &CreateAvailability {
            volunteer_id: volunteer.id,
            date: window.date,
            start_time: window.start_time,
            end_time: window.end_time,
        },
    )
    .await?;

    tracing::info!(
        availability_id = slot.id,
        volunteer_id = volunteer.id,
        date = %slot.date,
        "Availability slot created"
    );

    Ok((StatusCode::CREATED, Json(slot)))
}

/// GET /api/availability/my
pub async fn list_my(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Availability>>> {
    user.require(Permission::ViewOwnAvailability)?;
    let volunteer = resolve_volunteer(&state.pool, &user).await?;
    let slots = AvailabilityRepo::list_by_volunteer(&state.pool, volunteer.id).await?;
    Ok(Json(slots))
}

/// DELETE /api/availability/{id}
///
/// Only the owning volunteer may delete, and only while no booking holds the
/// slot.
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    user.require(Permission::DeleteAvailability)?;
    let volunteer = resolve_volunteer(&state.pool, &user).await?;

    match AvailabilityRepo::delete_unreserved(&state.pool, id, volunteer.id).await? {
        SlotDeletion::Deleted => {
            tracing::info!(availability_id = id, volunteer_id = volunteer.id, "Availability slot deleted");
            Ok(Json(MessageResponse::new("Availability deleted")))
        }
        SlotDeletion::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Availability",
            id,
        })),
        SlotDeletion::NotOwner => Err(AppError::Core(CoreError::Forbidden(
            "You can only delete your own availability".into(),
        ))),
        SlotDeletion::Reserved => Err(AppError::Core(CoreError::Conflict(
            "Cannot delete a reserved availability slot".into(),
        ))),
    }
}

/// GET /api/availability/available
///
/// Open slots with volunteer details, optionally filtered by specialty,
/// modality and date.
pub async fn list_available(
    user: AuthUser,
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SlotQuery>,
) -> AppResult<Json<Vec<PublicSlot>>> {
    user.require(Permission::BrowseAvailability)?;
    let filter = SlotFilter::parse(
        query.specialty.as_deref(),
        query.modality.as_deref(),
        query.date.as_deref(),
    )?;
    let slots = AvailabilityRepo::list_open(&state.pool, &filter).await?;
    Ok(Json(slots))
}

/// GET /api/availability/public
///
/// Unauthenticated, unfiltered variant of [`list_available`].
pub async fn list_public(State(state): State<AppState>) -> AppResult<Json<Vec<PublicSlot>>> {
    let slots = AvailabilityRepo::list_open(&state.pool, &SlotFilter::default()).await?;
    Ok(Json(slots))
}

/// GET /api/availability/volunteer/{volunteer_id}
pub async fn list_by_volunteer(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(volunteer_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<Availability>>> {
    user.require(Permission::BrowseAvailability)?;
    let slots = AvailabilityRepo::list_by_volunteer(&state.pool, volunteer_id).await?;
    Ok(Json(slots))
}
