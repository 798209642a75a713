//! Client-related types shared between the backend API and the client
//!
//! Request/response DTOs used in API communication. Field names follow the
//! backend's camelCase JSON convention.

use serde::{Deserialize, Serialize};

use crate::models::Role;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Login response data (JWT bearer token plus the user it identifies)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    pub role: Role,
    pub id: i64,
    pub username: Option<String>,
}

/// Registration request (customer self-service and admin-created staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Sent on staff registration only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}
