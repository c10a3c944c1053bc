//! Account forms

pub mod sign_up;

pub use sign_up::SignUpForm;
