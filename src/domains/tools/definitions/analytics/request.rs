//! Report URL construction.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use super::models::ReportRequest;

/// Errors raised while building a report URL.
#[derive(Debug, Error)]
pub enum RequestBuildError {
    #[error("invalid base URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

/// Query string for a report request. Unset values are skipped; fields are
/// declared in the order they are encoded.
#[derive(Serialize)]
struct ReportQuery<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    after: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    before: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    limit: i64,
    #[serde(skip_serializing_if = "is_unset")]
    page: i64,
}

fn is_unset(value: &i64) -> bool {
    *value <= 0
}

/// Build `{base_url}/reports/{report_name}/data` with an encoded query.
///
/// The report name must already be validated. Range checks on the
/// parameters happen before this point.
pub fn build_report_url(base_url: &str, request: &ReportRequest) -> Result<Url, RequestBuildError> {
    let mut url = Url::parse(&format!(
        "{}/reports/{}/data",
        base_url, request.report_name
    ))?;

    let params = &request.parameters;
    let query = serde_urlencoded::to_string(ReportQuery {
        after: &params.after,
        before: &params.before,
        limit: params.limit,
        page: params.page,
    })?;

    if !query.is_empty() {
        url.set_query(Some(&query));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::analytics::models::{ReportParams, ReportType};

    fn request(report: ReportType, params: ReportParams) -> ReportRequest {
        ReportRequest::new(report, params)
    }

    #[test]
    fn test_only_set_parameters_are_sent() {
        let url = build_report_url(
            "https://api.example.com",
            &request(ReportType::Devices, ReportParams { limit: 50, ..Default::default() }),
        )
        .unwrap();

        assert_eq!(url.path(), "/reports/devices/data");
        assert_eq!(url.query(), Some("limit=50"));
        let keys: Vec<_> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["limit"]);
    }

    #[test]
    fn test_all_parameters() {
        let url = build_report_url(
            "https://api.gsa.gov/analytics/dap/v2",
            &request(
                ReportType::Traffic,
                ReportParams {
                    limit: 100,
                    page: 2,
                    after: "2024-01-01".to_string(),
                    before: "2024-01-31".to_string(),
                },
            ),
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.gsa.gov/analytics/dap/v2/reports/traffic/data?after=2024-01-01&before=2024-01-31&limit=100&page=2"
        );
    }

    #[test]
    fn test_no_parameters_means_no_query() {
        let url = build_report_url(
            "https://api.example.com",
            &request(ReportType::TopPages, ReportParams::default()),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/reports/top-pages/data");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_values_are_encoded() {
        let url = build_report_url(
            "https://api.example.com",
            &request(
                ReportType::Cities,
                ReportParams {
                    after: "2024-01-01 & more".to_string(),
                    ..Default::default()
                },
            ),
        )
        .unwrap();

        assert_eq!(url.query(), Some("after=2024-01-01+%26+more"));
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "after");
        assert_eq!(value, "2024-01-01 & more");
    }

    #[test]
    fn test_malformed_base_url() {
        let result = build_report_url(
            "not a url",
            &request(ReportType::Devices, ReportParams::default()),
        );
        assert!(matches!(result, Err(RequestBuildError::MalformedUrl(_))));
    }
}
