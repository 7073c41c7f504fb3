//! Report fetching: one GET, one response, one parse.

use reqwest::{Method, Request, StatusCode};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use url::Url;

use super::client::ApiClient;
use super::models::ReportRecord;

/// Failures arising from or after the network call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, including cancellation and timeouts.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The API answered with something other than 200 OK.
    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The 200 OK body was not a JSON array of records.
    #[error("failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch the records at `url`.
///
/// Cancelling `cancel` aborts an in-flight request and yields
/// [`FetchError::Network`].
pub async fn fetch_reports(
    client: &ApiClient,
    url: Url,
    cancel: &CancellationToken,
) -> Result<Vec<ReportRecord>, FetchError> {
    let request = Request::new(Method::GET, url);

    let exchange = async {
        let response = client
            .send(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read response: {}", e)))?;
        Ok::<_, FetchError>((status, body))
    };

    let (status, body) = tokio::select! {
        _ = cancel.cancelled() => {
            return Err(FetchError::Network("request cancelled".to_string()));
        }
        result = exchange => result?,
    };

    if status != StatusCode::OK {
        error!(status_code = status.as_u16(), response = %body, "API request failed");
        return Err(FetchError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    debug!("API response received: {} bytes", body.len());

    let reports: Vec<ReportRecord> = serde_json::from_str(&body)?;

    info!(count = reports.len(), "Successfully fetched reports");
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::analytics::mock::MockHttp;

    fn client(mock: std::sync::Arc<MockHttp>) -> ApiClient {
        ApiClient::with_http_client("https://api.example.com", "test-key", mock).unwrap()
    }

    fn url() -> Url {
        "https://api.example.com/reports/devices/data?limit=10".parse().unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock = MockHttp::respond(
            200,
            r#"[{"id":1,"report_name":"devices","device":"desktop","visits":1000},
                {"id":2,"report_name":"devices","device":"mobile","visits":400}]"#,
        );
        let reports = fetch_reports(&client(mock.clone()), url(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].device.as_deref(), Some("desktop"));
        assert_eq!(reports[1].visits, Some(400));

        let seen = mock.requests();
        assert_eq!(seen[0].method, Method::GET);
        assert_eq!(seen[0].url, url());
    }

    #[tokio::test]
    async fn test_fetch_empty_array() {
        let reports = fetch_reports(
            &client(MockHttp::respond(200, "[]")),
            url(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_upstream_error_keeps_body() {
        let err = fetch_reports(
            &client(MockHttp::respond(404, r#"{"error":"not found"}"#)),
            url(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        match &err {
            FetchError::Upstream { status, body } => {
                assert_eq!(*status, 404);
                assert_eq!(body, r#"{"error":"not found"}"#);
            }
            other => panic!("Expected upstream error, got {:?}", other),
        }
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_decode_error() {
        let err = fetch_reports(
            &client(MockHttp::respond(200, r#"{"not": "an array"}"#)),
            url(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_network_error() {
        let err = fetch_reports(
            &client(MockHttp::fail("connection refused")),
            url(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, FetchError::Network(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_fetch_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = fetch_reports(&client(MockHttp::hang()), url(), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(ref msg) if msg.contains("cancelled")));
    }

    #[tokio::test]
    async fn test_fetch_cancelled_while_in_flight() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let err = fetch_reports(&client(MockHttp::hang()), url(), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
