//! Setup errors raised while attaching page components.
//!
//! A component that cannot resolve one of its elements refuses to attach, so
//! nothing is ever registered against a partial document.

use std::fmt;

use thiserror::Error;

/// Kind of document element a component looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Writable container.
    Container,
    /// Text input.
    Input,
    /// Form.
    Form,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Container => "container",
            Self::Input => "input",
            Self::Form => "form",
        };
        f.write_str(label)
    }
}

/// Page component that failed to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// User directory loader.
    DataLoader,
    /// Registration form validator.
    FormValidator,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DataLoader => "data loader",
            Self::FormValidator => "form validator",
        };
        f.write_str(label)
    }
}

/// A required element was missing when a component was attached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// No element of the expected kind carries the identifier.
    #[error("{component} setup aborted: {kind} '{id}' not found")]
    MissingElement {
        /// Component being attached.
        component: Component,
        /// Kind of element looked up.
        kind: ElementKind,
        /// Identifier that was looked up.
        id: String,
    },
}

impl SetupError {
    /// Build a [`SetupError::MissingElement`].
    pub fn missing(component: Component, kind: ElementKind, id: impl Into<String>) -> Self {
        Self::MissingElement {
            component,
            kind,
            id: id.into(),
        }
    }
}
