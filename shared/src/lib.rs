//! Shared types for listable
//!
//! Common types used by the server and its clients: error types,
//! response structures, task models and ID utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
