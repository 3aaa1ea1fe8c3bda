//! Data models
//!
//! Shared between the server and its API consumers. Entity types carry a
//! matching `*Create` payload (client-supplied fields only).

pub mod certificate;

// Re-exports
pub use certificate::*;
