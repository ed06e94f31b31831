//! In-memory document implementing the document ports.
//!
//! Element state lives behind one shared mutex; handles returned by the
//! lookups are cheap clones pointing at that state. Submission dispatch
//! copies the listener list out of the lock before calling listeners, since
//! listeners read inputs and write containers through the same state.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{
    Container, ContainerContent, Document, FeedbackColor, FormElement, SubmitEvent,
    SubmitListener, TextInput,
};
use crate::domain::{DEFAULT_RESULTS_CONTAINER_ID, FormElementIds};

/// Observable state of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerState {
    /// Current content.
    pub content: ContainerContent,
    /// Text colour, unset until a component chooses one.
    pub color: Option<FeedbackColor>,
    /// Whether the container is shown.
    pub visible: bool,
}

impl Default for ContainerState {
    fn default() -> Self {
        Self {
            content: ContainerContent::Empty,
            color: None,
            visible: true,
        }
    }
}

#[derive(Default)]
struct DocumentState {
    containers: BTreeMap<String, ContainerState>,
    inputs: BTreeMap<String, String>,
    forms: BTreeMap<String, Vec<Arc<dyn SubmitListener>>>,
}

type SharedState = Arc<Mutex<DocumentState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, DocumentState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Result of dispatching one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitDispatch {
    /// Whether any listener suppressed the native submission.
    pub default_prevented: bool,
    /// Number of listeners that received the event.
    pub listeners: usize,
}

/// Shared, cloneable in-memory document.
///
/// # Examples
///
/// ```
/// use user_page::inbound::document::MemoryDocument;
///
/// let document = MemoryDocument::new()
///     .with_container("api-data")
///     .with_input("username", "ada");
/// assert_eq!(document.input_value("username").as_deref(), Some("ada"));
/// ```
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: SharedState,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding the results container and the registration form
    /// elements under their default identifiers. The feedback container
    /// starts hidden.
    pub fn registration_page() -> Self {
        let ids = FormElementIds::default();
        let document = Self::new()
            .with_container(DEFAULT_RESULTS_CONTAINER_ID)
            .with_form(&ids.form)
            .with_container(&ids.feedback)
            .with_input(&ids.username, "")
            .with_input(&ids.email, "")
            .with_input(&ids.password, "");
        document.set_visible(&ids.feedback, false);
        document
    }

    /// Add an empty, visible container.
    pub fn with_container(self, id: &str) -> Self {
        lock(&self.state)
            .containers
            .insert(id.to_owned(), ContainerState::default());
        self
    }

    /// Add a text input holding `value`.
    pub fn with_input(self, id: &str, value: &str) -> Self {
        lock(&self.state)
            .inputs
            .insert(id.to_owned(), value.to_owned());
        self
    }

    /// Add a form with no listeners.
    pub fn with_form(self, id: &str) -> Self {
        lock(&self.state).forms.insert(id.to_owned(), Vec::new());
        self
    }

    /// Overwrite an input's value, as typing would. Returns `false` when no
    /// such input exists.
    pub fn set_input_value(&self, id: &str, value: &str) -> bool {
        match lock(&self.state).inputs.get_mut(id) {
            Some(current) => {
                value.clone_into(current);
                true
            }
            None => false,
        }
    }

    /// Current value of an input.
    pub fn input_value(&self, id: &str) -> Option<String> {
        lock(&self.state).inputs.get(id).cloned()
    }

    /// Snapshot of a container's state.
    pub fn container_state(&self, id: &str) -> Option<ContainerState> {
        lock(&self.state).containers.get(id).cloned()
    }

    /// Submit a form, delivering one event to each listener in registration
    /// order. Returns `None` when no such form exists.
    pub fn submit(&self, form_id: &str) -> Option<SubmitDispatch> {
        let listeners = lock(&self.state).forms.get(form_id)?.clone();
        let mut event = MemorySubmitEvent::default();
        for listener in &listeners {
            listener.on_submit(&mut event);
        }
        Some(SubmitDispatch {
            default_prevented: event.default_prevented(),
            listeners: listeners.len(),
        })
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(container) = lock(&self.state).containers.get_mut(id) {
            container.visible = visible;
        }
    }
}

impl Document for MemoryDocument {
    fn container(&self, id: &str) -> Option<Arc<dyn Container>> {
        lock(&self.state).containers.contains_key(id).then(|| {
            Arc::new(MemoryElement {
                id: id.to_owned(),
                state: self.state.clone(),
            }) as Arc<dyn Container>
        })
    }

    fn input(&self, id: &str) -> Option<Arc<dyn TextInput>> {
        lock(&self.state).inputs.contains_key(id).then(|| {
            Arc::new(MemoryElement {
                id: id.to_owned(),
                state: self.state.clone(),
            }) as Arc<dyn TextInput>
        })
    }

    fn form(&self, id: &str) -> Option<Arc<dyn FormElement>> {
        lock(&self.state).forms.contains_key(id).then(|| {
            Arc::new(MemoryElement {
                id: id.to_owned(),
                state: self.state.clone(),
            }) as Arc<dyn FormElement>
        })
    }
}

/// Handle to one element of a [`MemoryDocument`].
struct MemoryElement {
    id: String,
    state: SharedState,
}

impl MemoryElement {
    fn update_container(&self, f: impl FnOnce(&mut ContainerState)) {
        if let Some(container) = lock(&self.state).containers.get_mut(&self.id) {
            f(container);
        }
    }
}

impl Container for MemoryElement {
    fn replace(&self, content: ContainerContent) {
        self.update_container(|container| container.content = content);
    }

    fn set_color(&self, color: FeedbackColor) {
        self.update_container(|container| container.color = Some(color));
    }

    fn set_visible(&self, visible: bool) {
        self.update_container(|container| container.visible = visible);
    }
}

impl TextInput for MemoryElement {
    fn value(&self) -> String {
        lock(&self.state)
            .inputs
            .get(&self.id)
            .cloned()
            .unwrap_or_default()
    }
}

impl FormElement for MemoryElement {
    fn add_submit_listener(&self, listener: Arc<dyn SubmitListener>) {
        if let Some(listeners) = lock(&self.state).forms.get_mut(&self.id) {
            listeners.push(listener);
        }
    }
}

/// Event passed to listeners by [`MemoryDocument::submit`].
#[derive(Debug, Default)]
pub struct MemorySubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent for MemorySubmitEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
