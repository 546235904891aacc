//! Booking model and the joined detail view.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use voluntech_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub school_id: DbId,
    pub availability_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Flat join of a booking with its slot and school.
#[derive(Debug, Clone, FromRow)]
pub struct BookingDetailRow {
    pub id: DbId,
    pub school_id: DbId,
    pub availability_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub volunteer_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookedSlot {
    pub id: DbId,
    pub volunteer_id: DbId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingSchool {
    pub id: DbId,
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
}

/// A booking with the slot it holds and the school that made it.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetail {
    pub id: DbId,
    pub school_id: DbId,
    pub availability_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub availability: BookedSlot,
    pub school: BookingSchool,
}

impl From<BookingDetailRow> for BookingDetail {
    fn from(row: BookingDetailRow) -> Self {
        Self {
            id: row.id,
            school_id: row.school_id,
            availability_id: row.availability_id,
            status: row.status,
            created_at: row.created_at,
            availability: BookedSlot {
                id: row.availability_id,
                volunteer_id: row.volunteer_id,
                date: row.date,
                start_time: row.start_time,
                end_time: row.end_time,
            },
            school: BookingSchool {
                id: row.school_id,
                school_name: row.school_name,
                contact_person: row.contact_person,
                phone: row.phone,
            },
        }
    }
}
