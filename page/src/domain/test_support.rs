//! Stub document elements for domain unit tests.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::data_loader::DEFAULT_RESULTS_CONTAINER_ID;
use crate::domain::form_validator::FormElementIds;
use crate::domain::ports::{
    Container, ContainerContent, Document, FeedbackColor, FormElement, SubmitEvent,
    SubmitListener, TextInput,
};

#[derive(Default)]
struct ContainerRecord {
    writes: Vec<ContainerContent>,
    color: Option<FeedbackColor>,
    visible: bool,
}

/// Container recording every write.
#[derive(Default)]
pub struct StubContainer {
    record: Mutex<ContainerRecord>,
}

impl StubContainer {
    fn with_record<T>(&self, f: impl FnOnce(&mut ContainerRecord) -> T) -> T {
        let mut record = self.record.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut record)
    }

    pub fn writes(&self) -> Vec<ContainerContent> {
        self.with_record(|record| record.writes.clone())
    }

    pub fn last_write(&self) -> Option<ContainerContent> {
        self.with_record(|record| record.writes.last().cloned())
    }

    pub fn color(&self) -> Option<FeedbackColor> {
        self.with_record(|record| record.color)
    }

    pub fn is_visible(&self) -> bool {
        self.with_record(|record| record.visible)
    }
}

impl Container for StubContainer {
    fn replace(&self, content: ContainerContent) {
        self.with_record(|record| record.writes.push(content));
    }

    fn set_color(&self, color: FeedbackColor) {
        self.with_record(|record| record.color = Some(color));
    }

    fn set_visible(&self, visible: bool) {
        self.with_record(|record| record.visible = visible);
    }
}

/// Input whose value tests can overwrite.
#[derive(Default)]
pub struct StubInput {
    value: Mutex<String>,
}

impl StubInput {
    pub fn set(&self, value: &str) {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner) = value.to_owned();
    }
}

impl TextInput for StubInput {
    fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Form collecting listeners so tests can dispatch to them.
#[derive(Default)]
pub struct StubForm {
    listeners: Mutex<Vec<Arc<dyn SubmitListener>>>,
}

impl StubForm {
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn dispatch(&self, event: &mut dyn SubmitEvent) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener.on_submit(event);
        }
    }
}

impl FormElement for StubForm {
    fn add_submit_listener(&self, listener: Arc<dyn SubmitListener>) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }
}

/// Submission event tracking whether the default was prevented.
#[derive(Debug, Default)]
pub struct StubSubmitEvent {
    prevented: bool,
}

impl SubmitEvent for StubSubmitEvent {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }

    fn default_prevented(&self) -> bool {
        self.prevented
    }
}

/// Document exposing a fixed set of stub elements under the default ids.
///
/// Elements always exist as fields so tests can inspect them, but lookups
/// only find the ones listed in `present`.
#[derive(Default)]
pub struct StubDocument {
    pub results: Arc<StubContainer>,
    pub feedback: Arc<StubContainer>,
    pub form: Arc<StubForm>,
    pub username: Arc<StubInput>,
    pub email: Arc<StubInput>,
    pub password: Arc<StubInput>,
    present: Vec<String>,
}

impl StubDocument {
    pub fn with_results_container() -> Self {
        Self {
            present: vec![DEFAULT_RESULTS_CONTAINER_ID.to_owned()],
            ..Self::default()
        }
    }

    pub fn registration_form() -> Self {
        let ids = FormElementIds::default();
        Self {
            present: vec![ids.form, ids.feedback, ids.username, ids.email, ids.password],
            ..Self::default()
        }
    }

    pub fn fill(&self, username: &str, email: &str, password: &str) {
        self.username.set(username);
        self.email.set(email);
        self.password.set(password);
    }

    fn has(&self, id: &str) -> bool {
        self.present.iter().any(|present| present == id)
    }
}

impl Document for StubDocument {
    fn container(&self, id: &str) -> Option<Arc<dyn Container>> {
        if !self.has(id) {
            return None;
        }
        let ids = FormElementIds::default();
        if id == DEFAULT_RESULTS_CONTAINER_ID {
            Some(self.results.clone())
        } else if id == ids.feedback {
            Some(self.feedback.clone())
        } else {
            None
        }
    }

    fn input(&self, id: &str) -> Option<Arc<dyn TextInput>> {
        if !self.has(id) {
            return None;
        }
        let ids = FormElementIds::default();
        if id == ids.username {
            Some(self.username.clone())
        } else if id == ids.email {
            Some(self.email.clone())
        } else if id == ids.password {
            Some(self.password.clone())
        } else {
            None
        }
    }

    fn form(&self, id: &str) -> Option<Arc<dyn FormElement>> {
        (self.has(id) && id == FormElementIds::default().form)
            .then(|| self.form.clone() as Arc<dyn FormElement>)
    }
}
