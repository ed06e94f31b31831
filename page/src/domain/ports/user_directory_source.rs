//! Driven port for fetching the user directory.
//!
//! The domain owns the record shape and the error contract so the data
//! loader stays independent of the HTTP client.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::UserRecord;

define_port_error! {
    /// Errors surfaced while fetching the user directory.
    pub enum UserDirectorySourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "user directory transport failed: {message}",
        /// The request exceeded the client timeout.
        Timeout { message: String } =>
            "user directory request timed out: {message}",
        /// The endpoint answered with a non-success status.
        Status { status: u16, message: String } =>
            "user directory returned status {status}: {message}",
        /// The response body was not a JSON array of named records.
        Decode { message: String } =>
            "user directory response decode failed: {message}",
    }
}

/// Port for reading the list of users shown on the page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectorySource: Send + Sync {
    /// Fetch every user record, in the order the directory returns them.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use user_page::domain::ports::{FixtureUserDirectorySource, UserDirectorySource};
    ///
    /// let source = FixtureUserDirectorySource::new(["Leanne Graham"]);
    /// let users = source.fetch_users().await?;
    /// assert_eq!(users.len(), 1);
    /// # Ok::<(), user_page::domain::ports::UserDirectorySourceError>(())
    /// ```
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, UserDirectorySourceError>;
}

/// Fixture implementation returning a fixed list of users.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectorySource {
    users: Vec<UserRecord>,
}

impl FixtureUserDirectorySource {
    /// Build a fixture that returns one record per name.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: names.into_iter().map(UserRecord::new).collect(),
        }
    }
}

#[async_trait]
impl UserDirectorySource for FixtureUserDirectorySource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, UserDirectorySourceError> {
        Ok(self.users.clone())
    }
}
