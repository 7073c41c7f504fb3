//! Tool definitions module.

pub mod analytics;

pub use analytics::{ApiClient, GetReportTool, ReportArgs};
