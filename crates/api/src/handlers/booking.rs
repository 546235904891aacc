//! Handlers for the `/bookings` resource.
//!
//! Reservation and cancellation are atomic in [`BookingRepo`]; the handlers
//! only resolve the caller's profile and translate outcomes into HTTP errors.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use voluntech_core::error::CoreError;
use voluntech_core::roles::{Permission, Role};
use voluntech_core::types::DbId;
use voluntech_db::models::booking::{Booking, BookingDetail};
use voluntech_db::repositories::{BookingRepo, CancelOutcome, ReserveOutcome};

use super::{resolve_school, resolve_volunteer};
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /bookings`.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(rename = "availabilityId", alias = "availability_id")]
    pub availability_id: Option<DbId>,
}

/// POST /api/bookings
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    user.require(Permission::CreateBooking)?;
    let school = resolve_school(&state.pool, &user).await?;

    let availability_id = input.availability_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Missing required field: availabilityId".into(),
        ))
    })?;

    match BookingRepo::reserve(&state.pool, school.id, availability_id).await? {
        ReserveOutcome::Reserved(booking) => {
            tracing::info!(
                booking_id = booking.id,
                availability_id,
                school_id = school.id,
                "Booking created"
            );
            Ok((StatusCode::CREATED, Json(booking)))
        }
        ReserveOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Availability",
            id: availability_id,
        })),
        ReserveOutcome::AlreadyReserved => {
            tracing::warn!(availability_id, school_id = school.id, "Slot already reserved");
            Err(AppError::Core(CoreError::Conflict(
                "Availability slot is already reserved".into(),
            )))
        }
    }
}

/// GET /api/bookings/my
///
/// Volunteers see bookings on their slots; schools see the bookings they made.
pub async fn list_my(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    user.require(Permission::ViewOwnBookings)?;

    let bookings = match user.role {
        Role::Volunteer => {
            let volunteer = resolve_volunteer(&state.pool, &user).await?;
            BookingRepo::list_for_volunteer(&state.pool, volunteer.id).await?
        }
        Role::School => {
            let school = resolve_school(&state.pool, &user).await?;
            BookingRepo::list_for_school(&state.pool, school.id).await?
        }
        Role::User | Role::Admin => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only schools and volunteers have bookings".into(),
            )))
        }
    };

    Ok(Json(bookings))
}

/// DELETE /api/bookings/{id}
///
/// Cancel a booking made by the caller's school and release its slot.
pub async fn cancel(
    user: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    user.require(Permission::CancelBooking)?;
    let school = resolve_school(&state.pool, &user).await?;

    match BookingRepo::cancel(&state.pool, id, school.id).await? {
        CancelOutcome::Cancelled(booking) => {
            tracing::info!(
                booking_id = booking.id,
                availability_id = booking.availability_id,
                school_id = school.id,
                "Booking cancelled"
            );
            Ok(Json(MessageResponse::new("Booking cancelled")))
        }
        CancelOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        })),
        CancelOutcome::NotOwner => Err(AppError::Core(CoreError::Forbidden(
            "You can only cancel your own bookings".into(),
        ))),
    }
}
