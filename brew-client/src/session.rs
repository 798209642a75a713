//! Session persistence
//!
//! The logged-in identity as an explicit object with a defined lifecycle:
//! created at login, cleared at logout, passed to whoever needs it. Persisted
//! under the app data dir so a restarted client resumes the login, the same
//! way the browser original kept its token across refreshes.

use std::path::{Path, PathBuf};

use thiserror::Error;

use shared::client::LoginResponse;
use shared::models::Role;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The authenticated user's identity and bearer token
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl Session {
    /// Build a session from a successful login. The response may omit the
    /// username, in which case the login input stands in.
    pub fn from_login(response: &LoginResponse, entered_username: &str) -> Self {
        Self {
            token: response.access_token.clone(),
            user_id: response.id,
            username: response
                .username
                .clone()
                .unwrap_or_else(|| entered_username.to_string()),
            role: response.role,
        }
    }
}

/// On-disk store for the current session: `{data_dir}/auth/session.json`
#[derive(Debug, Clone)]
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("auth/session.json"),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the persisted session, if any.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        let session: Session = serde_json::from_str(&content)?;
        tracing::info!(username = %session.username, "Loaded cached session");
        Ok(Some(session))
    }

    /// Persist the current session (login).
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(username = %session.username, "Session saved");
        Ok(())
    }

    /// Remove the persisted session (logout).
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Session cleared");
        }
        Ok(())
    }
}
