//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod document;
mod user_directory_source;

pub use document::{
    Container, ContainerContent, Document, FeedbackColor, FormElement, SubmitEvent,
    SubmitListener, TextInput,
};
#[cfg(test)]
pub use user_directory_source::MockUserDirectorySource;
pub use user_directory_source::{
    FixtureUserDirectorySource, UserDirectorySource, UserDirectorySourceError,
};
