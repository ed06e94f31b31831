//! In-memory document adapter.
//!
//! Hosts the page components outside a browser: the CLI and the behavioural
//! tests build a [`MemoryDocument`], attach components to it, and inspect or
//! render the resulting container state.

mod memory;
mod render;

pub use memory::{ContainerState, MemoryDocument, MemorySubmitEvent, SubmitDispatch};
pub use render::{render_container, render_content};
