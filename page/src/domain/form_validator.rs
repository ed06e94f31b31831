//! Registration form validation bound to document elements.
//!
//! Attaching resolves every element once. After that each submission is
//! evaluated from scratch: the native submission is suppressed, the fields
//! are read and validated, and the feedback container is overwritten.

use std::sync::{Arc, Mutex, PoisonError};

use registration_validation::{
    RegistrationCheck, RegistrationInput, ValidationResult, validate_registration,
};
use tracing::{debug, error, info};

use crate::domain::error::{Component, ElementKind, SetupError};
use crate::domain::feedback::Feedback;
use crate::domain::ports::{
    Container, Document, FormElement, SubmitEvent, SubmitListener, TextInput,
};

/// Identifiers of the elements the registration form needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormElementIds {
    /// The form whose submissions are intercepted.
    pub form: String,
    /// Container that receives the feedback.
    pub feedback: String,
    /// Username input.
    pub username: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl Default for FormElementIds {
    fn default() -> Self {
        Self {
            form: "registration-form".to_owned(),
            feedback: "form-feedback".to_owned(),
            username: "username".to_owned(),
            email: "email".to_owned(),
            password: "password".to_owned(),
        }
    }
}

/// Result of handling one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every check passed and the success message is shown.
    Succeeded,
    /// At least one check failed; its messages are shown.
    Failed {
        /// Failed checks in reporting order.
        failures: Vec<RegistrationCheck>,
    },
}

impl From<&ValidationResult> for SubmissionOutcome {
    fn from(result: &ValidationResult) -> Self {
        if result.is_valid() {
            Self::Succeeded
        } else {
            Self::Failed {
                failures: result.failures().to_vec(),
            }
        }
    }
}

/// Validator attached to a registration form.
pub struct FormValidator {
    feedback: Arc<dyn Container>,
    username: Arc<dyn TextInput>,
    email: Arc<dyn TextInput>,
    password: Arc<dyn TextInput>,
    last_result: Mutex<Option<ValidationResult>>,
}

impl FormValidator {
    /// Resolve the form's elements and listen for its submissions.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingElement`] for the first element that
    /// cannot be found. No listener is registered in that case.
    pub fn attach(document: &dyn Document, ids: &FormElementIds) -> Result<Arc<Self>, SetupError> {
        let attached = Self::resolve(document, ids);
        match attached {
            Ok((form, validator)) => {
                let validator = Arc::new(validator);
                form.add_submit_listener(validator.clone());
                info!(form = %ids.form, "registration form validation attached");
                Ok(validator)
            }
            Err(err) => {
                error!(error = %err, "registration form validation not attached");
                Err(err)
            }
        }
    }

    fn resolve(
        document: &dyn Document,
        ids: &FormElementIds,
    ) -> Result<(Arc<dyn FormElement>, Self), SetupError> {
        let missing =
            |kind: ElementKind, id: &str| SetupError::missing(Component::FormValidator, kind, id);

        let form = document
            .form(&ids.form)
            .ok_or_else(|| missing(ElementKind::Form, &ids.form))?;
        let feedback = document
            .container(&ids.feedback)
            .ok_or_else(|| missing(ElementKind::Container, &ids.feedback))?;
        let input = |id: &str| {
            document
                .input(id)
                .ok_or_else(|| missing(ElementKind::Input, id))
        };
        let username = input(&ids.username)?;
        let email = input(&ids.email)?;
        let password = input(&ids.password)?;

        Ok((
            form,
            Self {
                feedback,
                username,
                email,
                password,
                last_result: Mutex::new(None),
            },
        ))
    }

    /// Read the current raw field values.
    pub fn read_input(&self) -> RegistrationInput {
        RegistrationInput::new(
            self.username.value(),
            self.email.value(),
            self.password.value(),
        )
    }

    /// Handle one submission attempt.
    ///
    /// The native submission is suppressed before anything else happens.
    pub fn handle_submit(&self, event: &mut dyn SubmitEvent) -> SubmissionOutcome {
        event.prevent_default();

        let result = validate_registration(&self.read_input());
        Feedback::from_result(&result).apply(self.feedback.as_ref());

        let outcome = SubmissionOutcome::from(&result);
        debug!(?outcome, "registration form validated");
        *self
            .last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(result);
        outcome
    }

    /// Result behind the feedback currently shown, if any submission has
    /// been handled.
    pub fn last_result(&self) -> Option<ValidationResult> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SubmitListener for FormValidator {
    fn on_submit(&self, event: &mut dyn SubmitEvent) {
        self.handle_submit(event);
    }
}
