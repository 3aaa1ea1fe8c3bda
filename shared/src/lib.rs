//! Shared types for the Sigil platform
//!
//! Common types used across crates: error codes, the application error type,
//! API response structures, and certificate record models.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
