//! Domain primitives, services, and ports.
//!
//! Purpose: keep the page behaviour independent of the HTTP client and of
//! any concrete document. Components receive element handles and sources
//! through ports and never look anything up after they are attached.
//!
//! Public surface:
//! - DataLoader: renders the user directory into the results container.
//! - FormValidator: validates registration submissions and shows feedback.
//! - Feedback: pure rendering plan for a validation result.
//! - SetupError: a required element was missing at attach time.

pub mod data_loader;
pub mod error;
pub mod feedback;
pub mod form_validator;
pub mod ports;
pub mod user_record;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::data_loader::{
    DEFAULT_RESULTS_CONTAINER_ID, DataLoader, LoadOutcome, USER_DATA_FAILURE_MESSAGE,
};
pub use self::error::{Component, ElementKind, SetupError};
pub use self::feedback::Feedback;
pub use self::form_validator::{FormElementIds, FormValidator, SubmissionOutcome};
pub use self::user_record::UserRecord;
