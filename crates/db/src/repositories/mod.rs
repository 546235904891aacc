//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Operations that must be atomic
//! open their own transaction internally.

pub mod availability_repo;
pub mod booking_repo;
pub mod project_repo;
pub mod role_repo;
pub mod school_repo;
pub mod user_repo;
pub mod volunteer_repo;

pub use availability_repo::{AvailabilityRepo, SlotDeletion};
pub use booking_repo::{BookingRepo, CancelOutcome, ReserveOutcome};
pub use project_repo::{ClaimOutcome, ProjectRepo};
pub use role_repo::RoleRepo;
pub use school_repo::SchoolRepo;
pub use user_repo::UserRepo;
pub use volunteer_repo::VolunteerRepo;
