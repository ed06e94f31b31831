//! Reqwest-backed user directory adapter.
//!
//! This adapter owns transport details only: the GET request, timeout and
//! HTTP status mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::UserRecordDto;
use crate::domain::ports::{UserDirectorySource, UserDirectorySourceError};
use crate::domain::UserRecord;

/// Endpoint queried when no override is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// User directory adapter that performs one HTTP GET per fetch.
pub struct UserDirectoryHttpSource {
    client: Client,
    endpoint: Url,
}

impl UserDirectoryHttpSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let source = UserDirectoryHttpSource::new(endpoint, Duration::from_secs(10));
    /// assert!(source.is_ok() || source.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl UserDirectorySource for UserDirectoryHttpSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, UserDirectorySourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_users(body.as_ref())
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<UserRecord>, UserDirectorySourceError> {
    let decoded: Vec<UserRecordDto> = serde_json::from_slice(body).map_err(|error| {
        UserDirectorySourceError::decode(format!("invalid user directory JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(UserRecord::from).collect())
}

fn map_transport_error(error: reqwest::Error) -> UserDirectorySourceError {
    if error.is_timeout() {
        UserDirectorySourceError::timeout(error.to_string())
    } else {
        UserDirectorySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectorySourceError {
    UserDirectorySourceError::status(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network decoding and mapping helpers.

    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_names_in_order_and_ignores_other_fields() {
        let body = r#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "address": { "city": "Gwenborough" }
            },
            { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv" }
        ]"#;

        let users = parse_users(body.as_bytes()).expect("JSON should decode");
        let names: Vec<&str> = users.iter().map(UserRecord::name).collect();
        assert_eq!(names, ["Leanne Graham", "Ervin Howell"]);
    }

    #[test]
    fn parses_empty_array() {
        let users = parse_users(b"[]").expect("JSON should decode");
        assert!(users.is_empty());
    }

    #[rstest]
    #[case::not_json(b"<html>gateway error</html>".as_slice())]
    #[case::object_instead_of_array(br#"{"name": "Leanne Graham"}"#.as_slice())]
    #[case::missing_name(br#"[{"id": 1}]"#.as_slice())]
    #[case::non_string_name(br#"[{"name": 42}]"#.as_slice())]
    fn rejects_payloads_that_are_not_named_records(#[case] body: &[u8]) {
        let error = parse_users(body).expect_err("decode should fail");
        assert!(
            matches!(error, UserDirectorySourceError::Decode { .. }),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn status_errors_carry_code_and_compact_preview() {
        let error = map_status_error(
            StatusCode::SERVICE_UNAVAILABLE,
            b"{\n  \"error\": \"maintenance\"\n}",
        );
        assert_eq!(
            error,
            UserDirectorySourceError::status(503_u16, "{ \"error\": \"maintenance\" }")
        );
    }

    #[test]
    fn long_previews_are_truncated() {
        let body = "x".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
