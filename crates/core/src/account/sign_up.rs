//! Sign-up form validation
//!
//! Checks run before anything is sent to the identity provider. The first
//! failing check wins.

use timelog_domain::constants::{MIN_EMAIL_LENGTH, MIN_PASSWORD_LENGTH};
use timelog_domain::SignUpError;

/// Raw sign-up form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// # Errors
    /// `InvalidEmail` when the trimmed email is shorter than five characters,
    /// `PasswordTooShort` when the trimmed password is shorter than eight,
    /// `PasswordMismatch` when the confirmation differs from the password.
    pub fn validate(&self) -> Result<(), SignUpError> {
        if self.email.trim().chars().count() < MIN_EMAIL_LENGTH {
            return Err(SignUpError::InvalidEmail);
        }
        if self.password.trim().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignUpError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(SignUpError::PasswordMismatch);
        }
        Ok(())
    }
}
