//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Create/update DTOs for inserts and patches where the table is writable

pub mod availability;
pub mod booking;
pub mod project;
pub mod role;
pub mod school;
pub mod user;
pub mod volunteer;
