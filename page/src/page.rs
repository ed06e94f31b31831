//! Page lifecycle: what happens when the document is ready.
//!
//! Both components attach independently. A component whose elements are
//! missing is skipped (its setup error is already logged) and the other one
//! still runs. The form is attached before the directory fetch is awaited,
//! so submissions are handled while the list is loading.

use std::sync::Arc;

use crate::domain::ports::{Document, UserDirectorySource};
use crate::domain::{
    DEFAULT_RESULTS_CONTAINER_ID, DataLoader, FormElementIds, FormValidator, LoadOutcome,
};

/// Identifiers of every element the page components use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElementIds {
    /// Results container for the user directory.
    pub results: String,
    /// Registration form elements.
    pub form: FormElementIds,
}

impl Default for PageElementIds {
    fn default() -> Self {
        Self {
            results: DEFAULT_RESULTS_CONTAINER_ID.to_owned(),
            form: FormElementIds::default(),
        }
    }
}

/// Components that attached when the document became ready.
pub struct ReadyPage {
    /// Outcome of the directory load, or `None` when the loader did not attach.
    pub load: Option<LoadOutcome>,
    /// Attached registration validator, or `None` when it did not attach.
    pub registration: Option<Arc<FormValidator>>,
}

/// Run the document-ready handlers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use user_page::domain::LoadOutcome;
/// use user_page::domain::ports::FixtureUserDirectorySource;
/// use user_page::inbound::document::MemoryDocument;
/// use user_page::page::{PageElementIds, on_document_ready};
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let document = MemoryDocument::registration_page();
/// let source = Arc::new(FixtureUserDirectorySource::new(["Leanne Graham"]));
/// let page = on_document_ready(&document, &PageElementIds::default(), source).await;
/// assert_eq!(page.load, Some(LoadOutcome::Rendered { count: 1 }));
/// assert!(page.registration.is_some());
/// # });
/// ```
pub async fn on_document_ready(
    document: &dyn Document,
    ids: &PageElementIds,
    source: Arc<dyn UserDirectorySource>,
) -> ReadyPage {
    let registration = FormValidator::attach(document, &ids.form).ok();
    let loader = DataLoader::attach(document, &ids.results, source).ok();
    let load = match loader {
        Some(loader) => Some(loader.load().await),
        None => None,
    };
    ReadyPage { load, registration }
}
