//! Client configuration

/// Client configuration for connecting to the café backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authenticated requests
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a client from this configuration
    pub fn build(&self) -> Result<super::CafeClient, super::ClientError> {
        super::CafeClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_chaining() {
        let config = ClientConfig::new("https://cafe.example.com")
            .with_token("abc")
            .with_timeout(5);
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
    }
}
