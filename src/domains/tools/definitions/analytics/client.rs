//! HTTP client wrapper for the analytics API.
//!
//! [`ApiClient`] decorates every outgoing request with the JSON content
//! headers and, when configured, the `X-API-KEY` credential, then hands the
//! request to an [`HttpSend`] implementation. Production code uses
//! [`reqwest::Client`]; tests substitute a recording double.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue, InvalidHeaderValue};
use reqwest::{Request, Response};
use thiserror::Error;

/// Header carrying the API key.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

const APPLICATION_JSON: &str = "application/json";

/// Error produced by an [`HttpSend`] implementation.
pub type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Transport capability: send one request, get one response.
#[async_trait]
pub trait HttpSend: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, SendError>;
}

#[async_trait]
impl HttpSend for reqwest::Client {
    async fn send(&self, request: Request) -> Result<Response, SendError> {
        Ok(self.execute(request).await?)
    }
}

/// Errors raised while constructing an [`ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API key contains characters not allowed in an HTTP header: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Shared, read-only client for the analytics API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<HeaderValue>,
    http: Arc<dyn HttpSend>,
}

impl ApiClient {
    /// Create a client backed by `reqwest` with the given request timeout.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Self::with_http_client(base_url, api_key, Arc::new(http))
    }

    /// Create a client that delegates transport to `http`.
    pub fn with_http_client(
        base_url: &str,
        api_key: &str,
        http: Arc<dyn HttpSend>,
    ) -> Result<Self, ClientError> {
        let api_key = if api_key.is_empty() {
            None
        } else {
            let mut value = HeaderValue::from_str(api_key)?;
            value.set_sensitive(true);
            Some(value)
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http,
        })
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API key will be sent.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Set the standard headers on `request`, replacing any existing values
    /// for the same names. Other headers are left alone.
    pub fn apply_headers(&self, request: &mut Request) {
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if let Some(key) = &self.api_key {
            headers.insert(API_KEY_HEADER, key.clone());
        }
    }

    /// Decorate `request` and send it through the underlying transport.
    pub async fn send(&self, mut request: Request) -> Result<Response, SendError> {
        self.apply_headers(&mut request);
        self.http.send(request).await
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::analytics::mock::MockHttp;
    use reqwest::Method;

    fn get(url: &str) -> Request {
        Request::new(Method::GET, url.parse().unwrap())
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let cases = [
            ("https://api.example.com", "https://api.example.com"),
            ("https://api.example.com/", "https://api.example.com"),
            ("https://api.example.com///", "https://api.example.com"),
            ("https://api.example.com/v1/analytics/", "https://api.example.com/v1/analytics"),
        ];
        for (input, expected) in cases {
            let client = ApiClient::with_http_client(input, "k", MockHttp::respond(200, "[]")).unwrap();
            assert_eq!(client.base_url(), expected);
        }
    }

    #[test]
    fn test_empty_api_key_is_not_sent() {
        let client =
            ApiClient::with_http_client("https://api.example.com", "", MockHttp::respond(200, "[]"))
                .unwrap();
        assert!(!client.has_api_key());

        let mut request = get("https://api.example.com/test");
        client.apply_headers(&mut request);
        assert_eq!(request.headers().len(), 2);
        assert!(request.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_invalid_api_key_rejected() {
        let result = ApiClient::with_http_client(
            "https://api.example.com",
            "bad\nkey",
            MockHttp::respond(200, "[]"),
        );
        assert!(matches!(result, Err(ClientError::InvalidApiKey(_))));
    }

    #[tokio::test]
    async fn test_send_injects_headers() {
        let mock = MockHttp::respond(200, r#"{"success": true}"#);
        let client =
            ApiClient::with_http_client("https://api.example.com", "test-key", mock.clone()).unwrap();

        let response = client.send(get("https://api.example.com/test")).await.unwrap();
        assert_eq!(response.status(), 200);

        let seen = mock.requests();
        assert_eq!(seen.len(), 1);
        let headers = &seen[0].headers;
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[API_KEY_HEADER], "test-key");
    }

    #[tokio::test]
    async fn test_send_overrides_conflicting_headers() {
        let mock = MockHttp::respond(200, "{}");
        let client =
            ApiClient::with_http_client("https://api.example.com", "test-key", mock.clone()).unwrap();

        let mut request = get("https://api.example.com/test");
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("old-key"));
        headers.insert("custom-header", HeaderValue::from_static("should-remain"));

        client.send(request).await.unwrap();

        let seen = mock.requests();
        let headers = &seen[0].headers;
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[API_KEY_HEADER], "test-key");
        assert_eq!(headers["custom-header"], "should-remain");
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
    }

    #[tokio::test]
    async fn test_send_passes_non_200_through() {
        let mock = MockHttp::respond(404, r#"{"error": "not found"}"#);
        let client =
            ApiClient::with_http_client("https://api.example.com", "test-key", mock).unwrap();

        let response = client.send(get("https://api.example.com/notfound")).await.unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_send_propagates_transport_error() {
        let client = ApiClient::with_http_client(
            "https://api.example.com",
            "test-key",
            MockHttp::fail("network error"),
        )
        .unwrap();

        let err = client.send(get("https://api.example.com/test")).await.unwrap_err();
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = ApiClient::with_http_client(
            "https://api.example.com",
            "super_secret_key",
            MockHttp::respond(200, "[]"),
        )
        .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super_secret_key"));
    }
}
