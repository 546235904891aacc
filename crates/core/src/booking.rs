//! Booking status values.

/// Booking is active and holds its availability slot.
pub const STATUS_CONFIRMED: &str = "confirmed";
