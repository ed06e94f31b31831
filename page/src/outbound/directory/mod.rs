//! User directory outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `UserDirectorySource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USERS_ENDPOINT, UserDirectoryHttpSource};
