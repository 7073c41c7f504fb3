//! Analytics report tools backed by the Digital Analytics Program API.

pub mod client;
pub mod common;
pub mod fetch;
pub mod get_report;
pub mod models;
pub mod request;

pub use client::{ApiClient, ClientError, HttpSend};
pub use common::DEFAULT_API_BASE_URL;
pub use fetch::FetchError;
pub use get_report::GetReportTool;
pub use models::{ReportArgs, ReportRecord, ReportType};
pub use request::RequestBuildError;

#[cfg(test)]
pub(crate) mod mock {
    //! Recording [`HttpSend`] double.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use reqwest::header::HeaderMap;
    use reqwest::{Method, Request, Response};
    use url::Url;

    use super::client::{HttpSend, SendError};

    enum Behaviour {
        Respond { status: u16, body: String },
        Fail(String),
        Hang,
    }

    #[derive(Debug, Clone)]
    pub struct SeenRequest {
        pub method: Method,
        pub url: Url,
        pub headers: HeaderMap,
    }

    pub struct MockHttp {
        behaviour: Behaviour,
        seen: Mutex<Vec<SeenRequest>>,
    }

    impl MockHttp {
        fn with(behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self {
                behaviour,
                seen: Mutex::new(Vec::new()),
            })
        }

        pub fn respond(status: u16, body: impl Into<String>) -> Arc<Self> {
            Self::with(Behaviour::Respond {
                status,
                body: body.into(),
            })
        }

        pub fn fail(message: impl Into<String>) -> Arc<Self> {
            Self::with(Behaviour::Fail(message.into()))
        }

        pub fn hang() -> Arc<Self> {
            Self::with(Behaviour::Hang)
        }

        pub fn requests(&self) -> Vec<SeenRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpSend for MockHttp {
        async fn send(&self, request: Request) -> Result<Response, SendError> {
            self.seen.lock().unwrap().push(SeenRequest {
                method: request.method().clone(),
                url: request.url().clone(),
                headers: request.headers().clone(),
            });

            match &self.behaviour {
                Behaviour::Respond { status, body } => {
                    let response = http::Response::builder()
                        .status(*status)
                        .body(body.clone())?;
                    Ok(Response::from(response))
                }
                Behaviour::Fail(message) => Err(message.clone().into()),
                Behaviour::Hang => futures::future::pending().await,
            }
        }
    }
}
