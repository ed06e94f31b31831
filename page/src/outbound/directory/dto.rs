//! DTOs for decoding the user directory JSON payload.
//!
//! The upstream records carry addresses, companies, and more; only `name` is
//! decoded and every other field is ignored.

use serde::Deserialize;

use crate::domain::UserRecord;

#[derive(Debug, Deserialize)]
pub(super) struct UserRecordDto {
    pub(super) name: String,
}

impl From<UserRecordDto> for UserRecord {
    fn from(value: UserRecordDto) -> Self {
        Self::new(value.name)
    }
}
