//! Client configuration
//!
//! Everything here is fixed at construction time; the builder validates and
//! then hands a [`Client`](crate::client::Client) back. When token auth is
//! enabled, `build()` eagerly exchanges the key pair for a bearer token and
//! fails construction if the exchange fails.

use std::sync::Arc;
use std::time::Duration;

use ghink_domain::{GhinkError, Result, DEFAULT_ENDPOINT};

use crate::client::Client;
use crate::codec::{Codec, JsonCodec};
use crate::credentials::CredentialStore;
use crate::logging::{LogSink, TracingSink};
use crate::transport::HttpTransport;

/// Immutable-after-construction configuration for a client.
pub struct ClientConfig {
    /// Base URL of the upstream API, without a trailing slash.
    pub endpoint: String,
    /// Whether bearer-token authorization is in use.
    pub enable_token: bool,
    /// Per-attempt HTTP timeout.
    pub timeout: Duration,
    /// Maximum attempts per call. Always at least 1.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub retry_delay: Duration,
    /// Double the delay after each retried attempt.
    pub exponential_backoff: bool,
    /// Serialization seam.
    pub codec: Arc<dyn Codec>,
    /// Leveled log sink.
    pub log: Arc<dyn LogSink>,
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    secret_id: String,
    secret_key: String,
    endpoint: String,
    enable_token: bool,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
    exponential_backoff: bool,
    codec: Arc<dyn Codec>,
    log: Arc<dyn LogSink>,
}

impl ClientBuilder {
    pub(crate) fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            enable_token: true,
            timeout: Duration::from_secs(10),
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            exponential_backoff: true,
            codec: Arc::new(JsonCodec),
            log: Arc::new(TracingSink),
        }
    }

    /// Override the upstream base URL (e.g. for a staging deployment).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Enable or disable bearer-token authorization. When disabled, no token
    /// is acquired at construction and callers use key mode.
    pub fn enable_token(mut self, enabled: bool) -> Self {
        self.enable_token = enabled;
        self
    }

    /// Per-attempt HTTP timeout. Must be non-zero.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Maximum attempts per call (initial try + retries). Must be at least 1.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Delay applied before the first retry.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Double the inter-retry delay after each retried attempt.
    pub fn exponential_backoff(mut self, enabled: bool) -> Self {
        self.exponential_backoff = enabled;
        self
    }

    /// Replace the default JSON codec.
    pub fn codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = codec;
        self
    }

    /// Replace the default tracing-backed log sink.
    pub fn log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log = sink;
        self
    }

    /// Validate the configuration and construct the client.
    ///
    /// With token auth enabled this performs the initial token exchange;
    /// construction fails if the exchange fails.
    pub async fn build(self) -> Result<Client> {
        if self.max_retries == 0 {
            return Err(GhinkError::Config("max_retries must be at least 1".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(GhinkError::Config("timeout must be greater than zero".to_string()));
        }

        let transport = HttpTransport::new(self.timeout)?;
        let credentials = CredentialStore::new(self.secret_id, self.secret_key);
        let config = ClientConfig {
            endpoint: self.endpoint.trim_end_matches('/').to_string(),
            enable_token: self.enable_token,
            timeout: self.timeout,
            max_retries: self.max_retries,
            retry_delay: self.retry_delay,
            exponential_backoff: self.exponential_backoff,
            codec: self.codec,
            log: self.log,
        };

        let client = Client::assemble(config, transport, credentials);

        if client.config().enable_token {
            client.refresh_token().await?;
        }

        Ok(client)
    }
}
