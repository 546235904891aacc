//! Roles and the permission table used by the role gate.
//!
//! Role names must match the seed data in
//! `20240501000001_create_roles_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_SCHOOL: &str = "school";
pub const ROLE_VOLUNTEER: &str = "volunteer";
pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// The closed set of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    School,
    Volunteer,
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::School, Role::Volunteer, Role::User, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::School => ROLE_SCHOOL,
            Role::Volunteer => ROLE_VOLUNTEER,
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }

    /// Whether a new account may pick this role during public registration.
    pub fn is_self_assignable(self) -> bool {
        !matches!(self, Role::Admin)
    }

    /// Whether this role is granted `permission` by the permission table.
    pub fn can(self, permission: Permission) -> bool {
        permission.allowed_roles().contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_SCHOOL => Ok(Role::School),
            ROLE_VOLUNTEER => Ok(Role::Volunteer),
            ROLE_USER => Ok(Role::User),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(CoreError::Validation(format!("Invalid role '{other}'"))),
        }
    }
}

/// Operations guarded by the role gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    CreateAvailability,
    ViewOwnAvailability,
    DeleteAvailability,
    BrowseAvailability,
    CreateBooking,
    ViewOwnBookings,
    CancelBooking,
    ManageProjects,
    ViewProjects,
    ClaimProject,
    ViewSchool,
    UpdateSchool,
    ManageVolunteerProfile,
}

const ANY_ROLE: &[Role] = &Role::ALL;
const SCHOOL_ONLY: &[Role] = &[Role::School];
const VOLUNTEER_ONLY: &[Role] = &[Role::Volunteer];

impl Permission {
    /// The permission table: which roles may perform each operation.
    ///
    /// Ownership checks (a school may only touch its own records) are applied
    /// on top of this by the handlers.
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Permission::CreateAvailability
            | Permission::ViewOwnAvailability
            | Permission::DeleteAvailability
            | Permission::ClaimProject
            | Permission::ManageVolunteerProfile => VOLUNTEER_ONLY,
            Permission::BrowseAvailability | Permission::ViewProjects => ANY_ROLE,
            Permission::CreateBooking | Permission::CancelBooking | Permission::ManageProjects => {
                SCHOOL_ONLY
            }
            Permission::ViewOwnBookings => &[Role::School, Role::Volunteer],
            Permission::ViewSchool => &[Role::School, Role::Volunteer, Role::Admin],
            Permission::UpdateSchool => &[Role::School, Role::Admin],
        }
    }
}

/// Reject `role` unless it appears in `allowed`.
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), CoreError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{role}' is not allowed to perform this action"
        )))
    }
}
