//! User record shown in the directory list.

/// One entry of the user directory.
///
/// Only the display name is kept; other fields of the upstream payload are
/// dropped while decoding. No uniqueness is enforced, duplicates are shown
/// as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    name: String,
}

impl UserRecord {
    /// Build a record from its display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name rendered as the list entry text.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Consume the record, returning its name.
    pub fn into_name(self) -> String {
        self.name
    }
}
