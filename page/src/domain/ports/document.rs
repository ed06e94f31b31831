//! Driving ports describing the document the page components run in.
//!
//! Elements are looked up by identifier once, when a component is attached.
//! Handles use interior mutability, mirroring how a browser exposes shared
//! element references.

use std::fmt;
use std::sync::Arc;

/// Colour applied to a container's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackColor {
    /// Green used for successful outcomes.
    Success,
    /// Red used for failures.
    Failure,
}

impl FeedbackColor {
    /// CSS colour value for this colour.
    pub const fn css(self) -> &'static str {
        match self {
            Self::Success => "#28a745",
            Self::Failure => "#dc3545",
        }
    }
}

impl fmt::Display for FeedbackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Whole content of a container.
///
/// Containers are always written with a full replacement so a reader never
/// observes a half-built state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContainerContent {
    /// Nothing rendered.
    #[default]
    Empty,
    /// A single block of text.
    Text(String),
    /// A list with one entry per item. May be empty.
    List(Vec<String>),
    /// Text lines shown with a visible break between each one.
    Lines(Vec<String>),
}

/// Writable region of the document.
pub trait Container: Send + Sync {
    /// Replace everything currently shown in the container.
    fn replace(&self, content: ContainerContent);

    /// Set the text colour.
    fn set_color(&self, color: FeedbackColor);

    /// Show or hide the container.
    fn set_visible(&self, visible: bool);
}

/// Readable text field.
pub trait TextInput: Send + Sync {
    /// Current raw value of the field.
    fn value(&self) -> String;
}

/// Submission event delivered to form listeners.
pub trait SubmitEvent {
    /// Suppress the native submission and navigation.
    fn prevent_default(&mut self);

    /// Whether a listener has suppressed the native submission.
    fn default_prevented(&self) -> bool;
}

/// Receiver for form submission events.
pub trait SubmitListener: Send + Sync {
    /// Handle one submission attempt.
    fn on_submit(&self, event: &mut dyn SubmitEvent);
}

/// Form that dispatches submission events.
pub trait FormElement: Send + Sync {
    /// Register `listener` for every later submission of this form.
    fn add_submit_listener(&self, listener: Arc<dyn SubmitListener>);
}

/// Identifier-based element lookup.
///
/// Each lookup returns `None` when no element of that kind carries the id.
pub trait Document: Send + Sync {
    /// Look up a writable container.
    fn container(&self, id: &str) -> Option<Arc<dyn Container>>;

    /// Look up a text input.
    fn input(&self, id: &str) -> Option<Arc<dyn TextInput>>;

    /// Look up a form.
    fn form(&self, id: &str) -> Option<Arc<dyn FormElement>>;
}
