//! Pure validation rules for the registration form.
//!
//! This crate turns the three raw registration field values into a
//! [`ValidationResult`] without touching any UI. Rendering the result is the
//! caller's concern; keeping the rules here lets them be tested without a
//! document harness.
//!
//! # Overview
//!
//! - Each field is trimmed before it is checked
//! - All checks run on every submission; none short-circuits another
//! - Failures are reported in a fixed order: username, email, password
//!
//! # Example
//!
//! ```
//! use registration_validation::{RegistrationCheck, RegistrationInput, validate_registration};
//!
//! let input = RegistrationInput::new("  ab ", "ada@example", "correct horse");
//! let result = validate_registration(&input);
//!
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.failures(),
//!     &[RegistrationCheck::Username, RegistrationCheck::Email]
//! );
//! ```

mod check;
mod validation;

pub use check::{
    EMAIL_REQUIRED_CHARS, PASSWORD_MIN, RegistrationCheck, USERNAME_MIN, check_email,
    check_password, check_username, field_length, trim_field,
};
pub use validation::{RegistrationInput, ValidationResult, validate_registration};

/// Message shown when every check passes.
pub const SUCCESS_MESSAGE: &str = "Registration successful!";
