//! Data models
//!
//! Shared between listable-server and board clients (via API).

pub mod task;

// Re-exports
pub use task::*;
