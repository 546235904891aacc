//! Domain logic for the volunteer scheduling platform.
//!
//! Everything here is pure: no database, no HTTP. The `db` and `api` crates
//! depend on these types and validation helpers.

pub mod availability;
pub mod booking;
pub mod credentials;
pub mod error;
pub mod project;
pub mod roles;
pub mod schedule;
pub mod types;
pub mod volunteer;
