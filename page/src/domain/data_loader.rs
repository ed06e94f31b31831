//! Loads the user directory into the results container.
//!
//! The loader fetches once per [`DataLoader::load`] call and writes the
//! container exactly once: either the list of names or the failure message.
//! Fetch failures stop here; they are logged and shown, never returned.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::error::{Component, ElementKind, SetupError};
use crate::domain::ports::{Container, ContainerContent, Document, UserDirectorySource};
use crate::domain::UserRecord;

/// Text shown in place of the list when the directory cannot be loaded.
pub const USER_DATA_FAILURE_MESSAGE: &str = "Failed to load user data.";

/// Identifier of the results container on the page.
pub const DEFAULT_RESULTS_CONTAINER_ID: &str = "api-data";

/// Result of one load, reported for instrumentation and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was rendered with `count` entries.
    Rendered {
        /// Number of list entries written.
        count: usize,
    },
    /// The failure message was rendered.
    Failed,
}

/// Domain-owned loader for the user directory list.
pub struct DataLoader {
    container: Arc<dyn Container>,
    source: Arc<dyn UserDirectorySource>,
}

impl DataLoader {
    /// Resolve the results container and bind it to `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingElement`] when `container_id` does not
    /// name a container. Nothing is fetched or written in that case.
    pub fn attach(
        document: &dyn Document,
        container_id: &str,
        source: Arc<dyn UserDirectorySource>,
    ) -> Result<Self, SetupError> {
        let container = document.container(container_id).ok_or_else(|| {
            let err =
                SetupError::missing(Component::DataLoader, ElementKind::Container, container_id);
            error!(error = %err, "user directory not attached");
            err
        })?;
        Ok(Self { container, source })
    }

    /// Fetch the directory and render it.
    ///
    /// On success the container holds one list entry per record, in the
    /// order received. On any fetch failure it holds only
    /// [`USER_DATA_FAILURE_MESSAGE`].
    pub async fn load(&self) -> LoadOutcome {
        match self.source.fetch_users().await {
            Ok(users) => {
                let names: Vec<String> = users.into_iter().map(UserRecord::into_name).collect();
                let count = names.len();
                self.container.replace(ContainerContent::List(names));
                debug!(count, "rendered user directory");
                LoadOutcome::Rendered { count }
            }
            Err(err) => {
                self.container
                    .replace(ContainerContent::Text(USER_DATA_FAILURE_MESSAGE.to_owned()));
                error!(error = %err, "error fetching user data");
                LoadOutcome::Failed
            }
        }
    }
}
