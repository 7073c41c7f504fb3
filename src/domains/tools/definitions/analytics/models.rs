//! Data model for the Digital Analytics Program (DAP) reports API.
//!
//! Records returned by the upstream API are flat objects with four fields that
//! are always present and a long tail of optional attributes whose presence
//! depends on the report that was requested. Optional attributes are modelled
//! as `Option<_>` and omitted on serialization when absent.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::common::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};

// ============================================================================
// Report Types
// ============================================================================

/// The closed set of reports served by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    Devices,
    Browsers,
    OperatingSystems,
    Languages,
    Countries,
    Cities,
    Traffic,
    TopPages,
    Downloads,
    Realtime,
    TrafficSources,
    Domains,
    Agencies,
}

impl ReportType {
    /// Every report type, in the order the API documents them.
    pub const ALL: [ReportType; 13] = [
        ReportType::Devices,
        ReportType::Browsers,
        ReportType::OperatingSystems,
        ReportType::Languages,
        ReportType::Countries,
        ReportType::Cities,
        ReportType::Traffic,
        ReportType::TopPages,
        ReportType::Downloads,
        ReportType::Realtime,
        ReportType::TrafficSources,
        ReportType::Domains,
        ReportType::Agencies,
    ];

    /// Wire name used in the API path.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Devices => "devices",
            ReportType::Browsers => "browsers",
            ReportType::OperatingSystems => "operating-systems",
            ReportType::Languages => "languages",
            ReportType::Countries => "countries",
            ReportType::Cities => "cities",
            ReportType::Traffic => "traffic",
            ReportType::TopPages => "top-pages",
            ReportType::Downloads => "downloads",
            ReportType::Realtime => "realtime",
            ReportType::TrafficSources => "traffic-sources",
            ReportType::Domains => "domains",
            ReportType::Agencies => "agencies",
        }
    }

    /// Check whether `name` is one of the known report types.
    pub fn is_valid(name: &str) -> bool {
        name.parse::<ReportType>().is_ok()
    }

    /// Comma-separated list of every valid wire name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known report type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report type '{0}'")]
pub struct UnknownReportType(pub String);

impl FromStr for ReportType {
    type Err = UnknownReportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownReportType(s.to_string()))
    }
}

// ============================================================================
// Tool Arguments
// ============================================================================

/// Arguments accepted by the `get_report` tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportArgs {
    /// Name of the report.
    #[schemars(description = "Name of the report")]
    pub report_name: String,

    /// Maximum number of records; 0 means the default of 1000.
    #[schemars(description = "Limit results (1-10000, default 1000)")]
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: i64,

    /// 1-based page number; 0 means the first page.
    #[schemars(description = "Page number (default 1)")]
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page: i64,

    #[schemars(description = "Start date (YYYY-MM-DD format)")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub after: String,

    #[schemars(description = "End date (YYYY-MM-DD format)")]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub before: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Filter and pagination parameters for a report request.
///
/// A zero `limit`/`page` or an empty date means "unset". Dates are passed
/// through verbatim; their format is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParams {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: i64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub page: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub after: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub before: String,
}

/// A parameter outside of its accepted range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("limit must be between 1 and {max}, got {value}")]
    LimitOutOfRange { value: i64, max: i64 },

    #[error("page must be >= 1, got {0}")]
    PageOutOfRange(i64),
}

impl ReportParams {
    /// Replace unset limit and page with their defaults (1000 and 1).
    ///
    /// Zero is indistinguishable from "unset", so an explicit `limit = 0`
    /// also becomes 1000.
    pub fn with_defaults(mut self) -> Self {
        if self.limit == 0 {
            self.limit = DEFAULT_LIMIT;
        }
        if self.page == 0 {
            self.page = DEFAULT_PAGE;
        }
        self
    }

    /// Check the numeric bounds. Zero values are accepted as "unset".
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.limit != 0 && !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(ParamError::LimitOutOfRange {
                value: self.limit,
                max: MAX_LIMIT,
            });
        }

        if self.page != 0 && self.page < 1 {
            return Err(ParamError::PageOutOfRange(self.page));
        }

        Ok(())
    }
}

impl From<&ReportArgs> for ReportParams {
    fn from(args: &ReportArgs) -> Self {
        Self {
            limit: args.limit,
            page: args.page,
            after: args.after.clone(),
            before: args.before.clone(),
        }
    }
}

/// A single request for report data, built fresh per tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub report_name: String,

    /// Agency context. Carried for logging; not routed by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_name: Option<String>,

    /// Domain context. Carried for logging; not routed by the builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    pub parameters: ReportParams,
}

impl ReportRequest {
    pub fn new(report: ReportType, parameters: ReportParams) -> Self {
        Self {
            report_name: report.as_str().to_string(),
            agency_name: None,
            domain: None,
            parameters,
        }
    }
}

// ============================================================================
// Records and Responses
// ============================================================================

/// Decode an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One analytics data point.
///
/// The upstream payload may omit the "required" fields or send them as
/// `null`. Either way they decode to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Generated unique identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    /// Name of the report this data point belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub report_name: String,

    /// Agency this data point belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub report_agency: String,

    /// Date (YYYY-MM-DD) the data point corresponds to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_visitors: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_session_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Type of device of the visitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_device: Option<String>,
    /// Operating system of the visitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    /// Path of the page visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageviews: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pageviews_per_session: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_default_channel_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_events: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visits: Option<i64>,
}

impl ReportRecord {
    /// Parse the `date` field as a calendar date.
    pub fn parse_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
    }
}

/// Error descriptor returned alongside (or instead of) report data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_fields: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Envelope for a set of report records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub data: Vec<ReportRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

impl ReportResponse {
    pub fn new(data: Vec<ReportRecord>) -> Self {
        Self { data, error: None }
    }
}
