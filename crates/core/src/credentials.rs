//! Credential policy for registration and login.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Check that `email` has the shape `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email format".into()))
    }
}

/// Check the password policy: at least [`MIN_PASSWORD_LENGTH`] characters
/// with one uppercase letter, one lowercase letter and one digit.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long and contain \
             an uppercase letter, a lowercase letter and a number"
        )))
    }
}
