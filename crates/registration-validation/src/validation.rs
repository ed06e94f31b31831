//! Whole-form validation producing a [`ValidationResult`].

use serde::Serialize;

use crate::check::{RegistrationCheck, check_email, check_password, check_username};

/// Raw registration field values as read from the form.
///
/// Values are kept untrimmed; trimming is part of validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    /// Username field value.
    pub username: String,
    /// Email field value.
    pub email: String,
    /// Password field value.
    pub password: String,
}

impl RegistrationInput {
    /// Build an input from the three field values.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Outcome of validating one submission.
///
/// ## Invariants
/// - [`ValidationResult::is_valid`] is `true` exactly when no check failed.
/// - Failures are stored in check order: username, email, password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "ValidationResultDto")]
pub struct ValidationResult {
    failures: Vec<RegistrationCheck>,
}

impl ValidationResult {
    /// Whether every check passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failed checks in reporting order.
    #[must_use]
    pub fn failures(&self) -> &[RegistrationCheck] {
        &self.failures
    }

    /// Failure messages in reporting order; empty when valid.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|check| check.message().to_owned())
            .collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationResultDto {
    is_valid: bool,
    messages: Vec<String>,
}

impl From<ValidationResult> for ValidationResultDto {
    fn from(value: ValidationResult) -> Self {
        Self {
            is_valid: value.is_valid(),
            messages: value.messages(),
        }
    }
}

/// Run every check against `input` and collect the failures.
///
/// All three checks always run, so a submission with several bad fields
/// reports all of them at once.
///
/// # Examples
///
/// ```
/// use registration_validation::{RegistrationInput, validate_registration};
///
/// let result = validate_registration(&RegistrationInput::new("ab", "a@b", "secret"));
/// assert!(!result.is_valid());
/// assert_eq!(result.messages().len(), 3);
///
/// let result = validate_registration(&RegistrationInput::new("ada", "ada@example.com", "analytical"));
/// assert!(result.is_valid());
/// assert!(result.messages().is_empty());
/// ```
#[must_use]
pub fn validate_registration(input: &RegistrationInput) -> ValidationResult {
    let failures = [
        check_username(&input.username),
        check_email(&input.email),
        check_password(&input.password),
    ]
    .into_iter()
    .flatten()
    .collect();
    ValidationResult { failures }
}
