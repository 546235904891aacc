//! Role gate applied on top of [`AuthUser`].
//!
//! Handlers call [`AuthUser::require`] with the [`Permission`] they implement
//! before touching any data. The role-to-permission table itself lives in
//! `voluntech_core::roles`.

use voluntech_core::roles::{authorize, Permission};

use super::auth::AuthUser;
use crate::error::AppError;

impl AuthUser {
    /// Reject with 403 Forbidden unless the caller's role grants `permission`.
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        authorize(self.role, permission.allowed_roles()).map_err(|err| {
            tracing::warn!(
                user_id = self.user_id,
                role = %self.role,
                ?permission,
                "Permission denied"
            );
            AppError::Core(err)
        })
    }
}
