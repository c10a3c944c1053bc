//! Account form types

use serde::{Deserialize, Serialize};

use crate::impl_domain_str_conversions;

/// Inputs of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignUpField {
    Email,
    Password,
    ConfirmPassword,
}

impl_domain_str_conversions!(SignUpField {
    Email => "email",
    Password => "password",
    ConfirmPassword => "confirm_password",
});
