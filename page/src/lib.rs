//! User directory loader and registration form validator.
//!
//! The page behaviour lives in [`domain`] behind ports; [`outbound`] fetches
//! the directory over HTTP and [`inbound`] hosts the components in an
//! in-memory document. [`page`] wires both components to the
//! document-ready signal.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod page;
