use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Status and raw body of a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP client operations (for mocking)
///
/// Any HTTP status is a successful transport result; errors are reserved for
/// connection failures and timeouts.
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<HttpResponse, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("doc-summarizer/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<HttpResponse, DomainError> {
        let mut request = self.client.post(url).timeout(timeout);

        for (key, value) in headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::provider("http", describe_error(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::provider("http", describe_error(&e)))?;

        Ok(HttpResponse { status, body })
    }
}

fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("Request timed out: {}", error)
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        format!("Request failed: {}", error)
    }
}
