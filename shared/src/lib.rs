//! Shared types for the café ordering client
//!
//! Data models and request/response DTOs mirroring the backend wire format,
//! plus money and business-time utilities. The backend serializes camelCase
//! JSON with all monetary values as integer cents.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
