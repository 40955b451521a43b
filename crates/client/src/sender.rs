//! Resilient sender
//!
//! A [`Sender`] captures one prepared request (or the error that prevented
//! preparing it) and dispatches it under the client's retry policy. The two
//! terminal operations differ only in the Authorization header and in how
//! an upstream 801 is handled: token mode refreshes the credential, key
//! mode backs off and tries again.
//!
//! Retryable conditions are transport errors, non-200 HTTP statuses, body
//! read failures, envelope decode failures, and code 801. Every other
//! envelope code is a terminal answer handed to the caller un-retried.

use ghink_domain::{GhinkError, Result};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::backoff::Backoff;
use crate::client::Client;
use crate::response::{parse_envelope, ApiResponse};

/// Upstream API code signaling an invalid or expired credential.
const CODE_PERMISSION_DENIED: i64 = 801;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Token,
    Key,
}

impl AuthMode {
    fn name(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Key => "key",
        }
    }
}

/// Outcome of one dispatched attempt.
enum Attempt {
    /// Terminal upstream answer, delivered to the caller as-is.
    Done(ApiResponse),
    /// Transport-level failure worth another attempt.
    Retry,
    /// Credential rejected (801); token mode refreshes before retrying.
    RetryAuth,
}

struct PreparedRequest {
    method: Method,
    url: Url,
    body: Option<Vec<u8>>,
}

/// A prepared, not-yet-dispatched request bound to a client.
pub struct Sender {
    client: Client,
    request: Result<PreparedRequest>,
}

impl Sender {
    pub(crate) fn prepared(client: Client, method: Method, url: Url, body: Option<Vec<u8>>) -> Self {
        Self { client, request: Ok(PreparedRequest { method, url, body }) }
    }

    pub(crate) fn failed(client: Client, err: GhinkError) -> Self {
        Self { client, request: Err(err) }
    }

    /// Dispatch with `Authorization: Bearer <token>`. An upstream 801
    /// triggers a token refresh before the next attempt; a failed refresh
    /// aborts the call.
    pub async fn with_token(self) -> Result<ApiResponse> {
        self.dispatch(AuthMode::Token).await
    }

    /// Dispatch with the key-pair credential. An upstream 801 is retried
    /// like any transient failure, with no recovery action.
    pub async fn with_key(self) -> Result<ApiResponse> {
        self.dispatch(AuthMode::Key).await
    }

    async fn dispatch(self, mode: AuthMode) -> Result<ApiResponse> {
        let Self { client, request } = self;
        // A construction failure short-circuits before any network activity.
        let request = request?;

        let config = client.config();
        let max_retries = config.max_retries;
        let mut backoff = Backoff::new(config.retry_delay, config.exponential_backoff);

        for attempt in 1..=max_retries {
            match attempt_once(&client, &request, mode, attempt).await {
                Attempt::Done(response) => return Ok(response),
                Attempt::RetryAuth if mode == AuthMode::Token => {
                    // Back off before touching the token endpoint, then renew.
                    // The wait here already covers this attempt; the loop adds
                    // no further delay.
                    backoff.wait().await;
                    client.refresh_token().await?;
                }
                Attempt::Retry | Attempt::RetryAuth => {
                    if attempt < max_retries {
                        backoff.wait().await;
                    }
                }
            }
        }

        Err(GhinkError::RetriesExhausted { attempts: max_retries })
    }
}

/// One attempt: attach per-attempt headers, round-trip, classify.
async fn attempt_once(
    client: &Client,
    request: &PreparedRequest,
    mode: AuthMode,
    attempt: u32,
) -> Attempt {
    let authorization = match mode {
        AuthMode::Token => client.credentials().bearer_header().await,
        AuthMode::Key => client.credentials().key_header(),
    };

    client.logger().debug(&format!(
        "send request to {}, method {} with {} (attempt {})",
        request.url,
        request.method,
        mode.name(),
        attempt,
    ));

    let outcome = client
        .transport()
        .round_trip(
            request.method.clone(),
            request.url.clone(),
            &authorization,
            request.body.as_deref(),
        )
        .await;

    let (status, body) = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            client.logger().debug(&format!("request failed: {err}, retrying..."));
            return Attempt::Retry;
        }
    };

    // The envelope is only trusted behind an HTTP 200.
    if status != StatusCode::OK {
        client.logger().debug(&format!("received HTTP status {status}, retrying..."));
        return Attempt::Retry;
    }

    let parsed = match parse_envelope(client.codec(), &body) {
        Ok(parsed) => parsed,
        Err(err) => {
            client.logger().debug(&format!("failed to decode response body: {err}, retrying..."));
            return Attempt::Retry;
        }
    };

    client.logger().debug(&format!(
        "upstream response httpCode {}, apiCode {}, msg {}",
        status.as_u16(),
        parsed.code,
        parsed.msg,
    ));

    if parsed.code == CODE_PERMISSION_DENIED {
        match mode {
            AuthMode::Token => client
                .logger()
                .debug("permission denied, maybe token expired, try to renew"),
            AuthMode::Key => client.logger().debug("permission denied"),
        }
        return Attempt::RetryAuth;
    }

    Attempt::Done(parsed)
}
