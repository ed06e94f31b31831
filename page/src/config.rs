//! Page settings loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::directory::DEFAULT_USERS_ENDPOINT;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Settings for the user directory source.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_PAGE")]
pub struct PageSettings {
    /// Override for the user directory endpoint.
    pub users_endpoint: Option<String>,
    /// Client request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
}

impl PageSettings {
    /// Return the configured endpoint, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not an absolute URL.
    pub fn users_endpoint(&self) -> Result<Url, url::ParseError> {
        Url::parse(
            self.users_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_USERS_ENDPOINT),
        )
    }

    /// Return the configured request timeout, falling back to the default.
    /// A zero value is raised to one second.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .max(1);
        Duration::from_secs(secs)
    }
}
