//! Typed endpoint wrappers
//!
//! One submodule per backend area. All methods live on [`CafeClient`] so the
//! front end holds a single handle.

mod auth;
mod inventory;
mod items;
mod orders;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpTransport;

/// Handle to the café backend API
#[derive(Debug, Clone)]
pub struct CafeClient {
    http: HttpTransport,
}

impl CafeClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpTransport::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    /// Attach the bearer token to every subsequent request.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.http.set_token(token);
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&mut self) {
        self.http.clear_token();
    }

    pub(crate) fn http(&self) -> &HttpTransport {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CafeClient::new(&ClientConfig::new("http://localhost:8080")).unwrap();
        assert!(!client.is_logged_in());
        assert!(client.token().is_none());
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
