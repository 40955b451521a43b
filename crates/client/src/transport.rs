//! HTTP transport
//!
//! One round trip per call: method, URL, Authorization header, optional
//! JSON body in; HTTP status and body bytes out. Retry policy lives in the
//! sender, not here. The underlying `reqwest::Client` is built once with
//! the configured timeout and the fixed SDK User-Agent.

use std::time::Duration;

use ghink_domain::{GhinkError, Result, USER_AGENT};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use url::Url;

#[derive(Clone)]
pub(crate) struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    pub(crate) fn new(timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT.as_str())
            .build()
            .map_err(|err| GhinkError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }

    /// Performs one round trip. Any error out of here is transport-level:
    /// connection failure, timeout, or body read failure.
    pub(crate) async fn round_trip(
        &self,
        method: Method,
        url: Url,
        authorization: &str,
        body: Option<&[u8]>,
    ) -> std::result::Result<(StatusCode, Vec<u8>), reqwest::Error> {
        let mut request = self.client.request(method, url).header(AUTHORIZATION, authorization);

        // Content-Type only when a body rides along; bodiless methods stay bare.
        if let Some(bytes) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes.to_vec());
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        Ok((status, bytes.to_vec()))
    }
}
