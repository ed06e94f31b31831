//! Individual field checks for the registration form.
//!
//! Each check inspects one trimmed field value and reports a
//! [`RegistrationCheck`] when the value is rejected. Checks never look at
//! other fields, so callers can run all of them unconditionally.
//!
//! # Rules
//!
//! - Username: at least [`USERNAME_MIN`] units long
//! - Email: contains both `@` and `.`
//! - Password: at least [`PASSWORD_MIN`] units long
//!
//! Field values come from browser form inputs, so trimming and length
//! follow the browser's string semantics: [`trim_field`] strips the
//! ECMAScript whitespace set and [`field_length`] counts UTF-16 code units.

use std::fmt;

/// Minimum length of a trimmed username, in UTF-16 code units.
pub const USERNAME_MIN: usize = 3;

/// Minimum length of a trimmed password, in UTF-16 code units.
pub const PASSWORD_MIN: usize = 8;

/// Characters an email address must contain.
pub const EMAIL_REQUIRED_CHARS: [char; 2] = ['@', '.'];

/// A failed check on one registration field.
///
/// The declaration order is the order in which checks run and in which
/// their messages are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistrationCheck {
    /// Username shorter than [`USERNAME_MIN`].
    Username,
    /// Email missing `@` or `.`.
    Email,
    /// Password shorter than [`PASSWORD_MIN`].
    Password,
}

impl RegistrationCheck {
    /// All checks in reporting order.
    pub const ALL: [Self; 3] = [Self::Username, Self::Email, Self::Password];

    /// Fixed user-facing message for this failed check.
    ///
    /// # Examples
    ///
    /// ```
    /// use registration_validation::RegistrationCheck;
    ///
    /// assert_eq!(
    ///     RegistrationCheck::Username.message(),
    ///     "Username must be at least 3 characters long."
    /// );
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Username => "Username must be at least 3 characters long.",
            Self::Email => "Email must contain both @ and . characters.",
            Self::Password => "Password must be at least 8 characters long.",
        }
    }

    /// Name of the form field this check applies to.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for RegistrationCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Whether `c` is whitespace or a line terminator to ECMAScript.
///
/// Differs from [`char::is_whitespace`]: U+0085 is kept and U+FEFF is
/// stripped.
const fn is_field_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing whitespace the way a browser trims input.
///
/// # Examples
///
/// ```
/// use registration_validation::trim_field;
///
/// assert_eq!(trim_field("\u{FEFF} ada \n"), "ada");
/// assert_eq!(trim_field("ada\u{85}"), "ada\u{85}");
/// ```
#[must_use]
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(is_field_whitespace)
}

/// Length of `value` in UTF-16 code units, as a browser reports it.
///
/// # Examples
///
/// ```
/// use registration_validation::field_length;
///
/// assert_eq!(field_length("abc"), 3);
/// assert_eq!(field_length("a\u{1F600}"), 3);
/// ```
#[must_use]
pub fn field_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Rejects usernames shorter than [`USERNAME_MIN`] once trimmed.
///
/// # Examples
///
/// ```
/// use registration_validation::{RegistrationCheck, check_username};
///
/// assert_eq!(check_username("ab"), Some(RegistrationCheck::Username));
/// assert_eq!(check_username("  abc  "), None);
/// ```
#[must_use]
pub fn check_username(raw: &str) -> Option<RegistrationCheck> {
    (field_length(trim_field(raw)) < USERNAME_MIN).then_some(RegistrationCheck::Username)
}

/// Rejects email values missing any of [`EMAIL_REQUIRED_CHARS`] once trimmed.
///
/// This is a presence check only; no further address syntax is enforced.
///
/// # Examples
///
/// ```
/// use registration_validation::{RegistrationCheck, check_email};
///
/// assert_eq!(check_email("a@b"), Some(RegistrationCheck::Email));
/// assert_eq!(check_email("a@b.c"), None);
/// ```
#[must_use]
pub fn check_email(raw: &str) -> Option<RegistrationCheck> {
    let trimmed = trim_field(raw);
    let complete = EMAIL_REQUIRED_CHARS
        .iter()
        .all(|required| trimmed.contains(*required));
    (!complete).then_some(RegistrationCheck::Email)
}

/// Rejects passwords shorter than [`PASSWORD_MIN`] once trimmed.
#[must_use]
pub fn check_password(raw: &str) -> Option<RegistrationCheck> {
    (field_length(trim_field(raw)) < PASSWORD_MIN).then_some(RegistrationCheck::Password)
}
