//! Rendering plan for registration feedback.
//!
//! [`Feedback::from_result`] is pure; [`Feedback::apply`] is the only step
//! that touches the document.

use registration_validation::{SUCCESS_MESSAGE, ValidationResult};

use crate::domain::ports::{Container, ContainerContent, FeedbackColor};

/// What the feedback container shows after one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    content: ContainerContent,
    color: FeedbackColor,
}

impl Feedback {
    /// Plan the feedback for a validation result.
    ///
    /// A valid result shows the success message in the success colour.
    /// Otherwise every failure message is shown, one per line, in the
    /// failure colour.
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.is_valid() {
            Self {
                content: ContainerContent::Text(SUCCESS_MESSAGE.to_owned()),
                color: FeedbackColor::Success,
            }
        } else {
            Self {
                content: ContainerContent::Lines(result.messages()),
                color: FeedbackColor::Failure,
            }
        }
    }

    /// Content written to the container.
    pub fn content(&self) -> &ContainerContent {
        &self.content
    }

    /// Colour applied to the container.
    pub fn color(&self) -> FeedbackColor {
        self.color
    }

    /// Whether this is the success feedback.
    pub fn is_success(&self) -> bool {
        self.color == FeedbackColor::Success
    }

    /// Show the container and overwrite its content and colour.
    pub fn apply(&self, container: &dyn Container) {
        container.set_visible(true);
        container.replace(self.content.clone());
        container.set_color(self.color);
    }
}
