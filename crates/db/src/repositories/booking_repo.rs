//! Repository for the `bookings` table.
//!
//! Creating and cancelling a booking both touch two rows (the booking and the
//! slot's `reserved` flag). Each runs in a single transaction so the flag is
//! `true` exactly when a booking references the slot.

use sqlx::PgPool;
use voluntech_core::booking::STATUS_CONFIRMED;
use voluntech_core::types::DbId;

use crate::models::booking::{Booking, BookingDetail, BookingDetailRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, school_id, availability_id, status, created_at, updated_at";

/// Select list for [`BookingDetailRow`].
const DETAIL_SELECT: &str = "SELECT b.id, b.school_id, b.availability_id, b.status, b.created_at,
            a.volunteer_id, a.date, a.start_time, a.end_time,
            s.school_name, s.contact_person, s.phone
     FROM bookings b
     JOIN availabilities a ON a.id = b.availability_id
     JOIN schools s ON s.id = b.school_id";

/// Outcome of [`BookingRepo::reserve`].
#[derive(Debug, Clone)]
pub enum ReserveOutcome {
    Reserved(Booking),
    NotFound,
    AlreadyReserved,
}

/// Outcome of [`BookingRepo::cancel`].
#[derive(Debug, Clone)]
pub enum CancelOutcome {
    /// The booking was deleted and its slot released.
    Cancelled(Booking),
    NotFound,
    /// The booking was made by a different school.
    NotOwner,
}

/// Provides the booking workflow's persistence operations.
pub struct BookingRepo;

impl BookingRepo {
    /// Reserve a slot for a school and record the booking.
    ///
    /// The slot is flipped with a compare-and-swap
    /// (`UPDATE ... WHERE reserved = false`), so of several concurrent
    /// callers exactly one sees [`ReserveOutcome::Reserved`]; the row lock
    /// makes the others re-check and observe [`ReserveOutcome::AlreadyReserved`].
    pub async fn reserve(
        pool: &PgPool,
        school_id: DbId,
        availability_id: DbId,
    ) -> Result<ReserveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let flipped: Option<(DbId,)> = sqlx::query_as(
            "UPDATE availabilities SET reserved = true
             WHERE id = $1 AND reserved = false
             RETURNING id",
        )
        .bind(availability_id)
        .fetch_optional(&mut *tx)
        .await?;

        if flipped.is_none() {
            tx.rollback().await?;
            tracing::debug!(availability_id, "Slot not flipped; checking why");
            let exists: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM availabilities WHERE id = $1)")
                    .bind(availability_id)
                    .fetch_one(pool)
                    .await?;
            return Ok(if exists.0 {
                ReserveOutcome::AlreadyReserved
            } else {
                ReserveOutcome::NotFound
            });
        }

        let query = format!(
            "INSERT INTO bookings (school_id, availability_id, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(school_id)
            .bind(availability_id)
            .bind(STATUS_CONFIRMED)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ReserveOutcome::Reserved(booking))
    }

    /// Cancel a booking made by `school_id`, releasing its slot.
    pub async fn cancel(
        pool: &PgPool,
        booking_id: DbId,
        school_id: DbId,
    ) -> Result<CancelOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE");
        let Some(booking) = sqlx::query_as::<_, Booking>(&query)
            .bind(booking_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(CancelOutcome::NotFound);
        };

        if booking.school_id != school_id {
            return Ok(CancelOutcome::NotOwner);
        }

        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(booking.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE availabilities SET reserved = false WHERE id = $1")
            .bind(booking.availability_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(CancelOutcome::Cancelled(booking))
    }

    /// Find a booking by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the booking holding a slot, if any.
    pub async fn find_by_availability(
        pool: &PgPool,
        availability_id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE availability_id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(availability_id)
            .fetch_optional(pool)
            .await
    }

    /// Bookings on a volunteer's slots, earliest slot first.
    pub async fn list_for_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE a.volunteer_id = $1
             ORDER BY a.date ASC, a.start_time ASC, b.id ASC"
        );
        let rows = sqlx::query_as::<_, BookingDetailRow>(&query)
            .bind(volunteer_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BookingDetail::from).collect())
    }

    /// Bookings made by a school, earliest slot first.
    pub async fn list_for_school(
        pool: &PgPool,
        school_id: DbId,
    ) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE b.school_id = $1
             ORDER BY a.date ASC, a.start_time ASC, b.id ASC"
        );
        let rows = sqlx::query_as::<_, BookingDetailRow>(&query)
            .bind(school_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(BookingDetail::from).collect())
    }
}
