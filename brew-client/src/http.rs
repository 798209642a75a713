//! HTTP transport
//!
//! Thin wrapper around `reqwest` carrying the base URL and bearer token.
//! Every response funnels through `handle_response`, which maps non-2xx
//! statuses onto the client error taxonomy. The order-status endpoint speaks
//! plain text in both directions, hence the `*_text` variants.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Network HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    async fn error_for_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Server(text),
        })
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let response = Self::error_for_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.apply_auth(self.client.get(self.url(path)));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.apply_auth(self.client.post(self.url(path)).json(body));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    /// POST a JSON body to an endpoint that answers with plain text.
    pub async fn post_for_text<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<String> {
        let req = self.apply_auth(self.client.post(self.url(path)).json(body));
        let response = Self::error_for_status(req.send().await?).await?;
        Ok(response.text().await?)
    }

    /// POST a raw text body to an endpoint that answers with plain text
    /// (the order-status contract).
    pub async fn post_text(&self, path: &str, body: impl Into<String>) -> ClientResult<String> {
        let req = self.apply_auth(
            self.client
                .post(self.url(path))
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(body.into()),
        );
        let response = Self::error_for_status(req.send().await?).await?;
        Ok(response.text().await?)
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.apply_auth(self.client.put(self.url(path)).json(body));
        let response = req.send().await?;
        self.handle_response(response).await
    }

    /// PUT a JSON body to an endpoint that answers with plain text.
    pub async fn put_for_text<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<String> {
        let req = self.apply_auth(self.client.put(self.url(path)).json(body));
        let response = Self::error_for_status(req.send().await?).await?;
        Ok(response.text().await?)
    }

    /// DELETE; the backend answers these with a plain-text confirmation,
    /// which callers ignore.
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.apply_auth(self.client.delete(self.url(path)));
        Self::error_for_status(req.send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = HttpTransport::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(
            transport.url("/api/items"),
            "http://localhost:8080/api/items"
        );
        assert_eq!(transport.url("api/items"), "http://localhost:8080/api/items");
    }

    #[test]
    fn test_token_management() {
        let mut transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        assert!(transport.token().is_none());
        transport.set_token("tok");
        assert_eq!(transport.auth_header().as_deref(), Some("Bearer tok"));
        transport.clear_token();
        assert!(transport.token().is_none());
    }
}
