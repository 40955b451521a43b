//! Client handle
//!
//! A [`Client`] is a cheap-to-clone handle over shared configuration,
//! transport, and credential state. It prepares requests ([`Client::send`])
//! and owns the token lifecycle ([`Client::refresh_token`]).

use std::sync::Arc;

use futures::future::BoxFuture;
use ghink_domain::{GhinkError, Result, TOKEN_PATH};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::codec::Codec;
use crate::config::{ClientBuilder, ClientConfig};
use crate::credentials::CredentialStore;
use crate::logging::LogSink;
use crate::sender::Sender;
use crate::transport::HttpTransport;

#[derive(Deserialize)]
struct TokenData {
    token: String,
}

/// Handle to the Ghink Open API.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: HttpTransport,
    credentials: Arc<CredentialStore>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.config.endpoint)
            .field("enable_token", &self.config.enable_token)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Start building a client from a key pair.
    pub fn builder(secret_id: impl Into<String>, secret_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(secret_id, secret_key)
    }

    pub(crate) fn assemble(
        config: ClientConfig,
        transport: HttpTransport,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            credentials: Arc::new(credentials),
        }
    }

    /// Base URL of the upstream API.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The configured log sink. Typed callers use this to report failures
    /// through the same channel as the core.
    pub fn logger(&self) -> &dyn LogSink {
        &*self.config.log
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn codec(&self) -> &Arc<dyn Codec> {
        &self.config.codec
    }

    pub(crate) fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Prepare a request for `url`. A non-nil payload is encoded through the
    /// codec now; encoding or URL failures are captured in the sender and
    /// surfaced when a terminal auth method runs, without any I/O.
    pub fn send(&self, url: &str, method: Method, payload: Option<Value>) -> Sender {
        let body = match payload {
            Some(value) => match self.codec().encode(&value) {
                Ok(bytes) => Some(bytes),
                Err(err) => return Sender::failed(self.clone(), err),
            },
            None => None,
        };

        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(err) => {
                return Sender::failed(self.clone(), GhinkError::RequestBuild(err.to_string()))
            }
        };

        Sender::prepared(self.clone(), method, url, body)
    }

    /// Exchange the key pair for a fresh bearer token and store it,
    /// replacing any prior token. On failure the prior token is left
    /// untouched.
    ///
    /// Boxed because the exchange re-enters the sender, which calls back
    /// into this method on 801.
    pub fn refresh_token(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let url = format!("{}{}", self.endpoint(), TOKEN_PATH);

            let response = match self.send(&url, Method::GET, None).with_key().await {
                Ok(response) => response,
                Err(err) => {
                    self.logger().error(&format!("failed to get token, sender error: {err}"));
                    return Err(GhinkError::TokenAcquisition(format!("sender error: {err}")));
                }
            };

            if !response.ok() {
                self.logger().error(&format!(
                    "failed to get token, upstream failed: code: {}, msg: {}",
                    response.code, response.msg,
                ));
                return Err(GhinkError::TokenAcquisition(format!(
                    "upstream failed: code: {}, msg: {}",
                    response.code, response.msg,
                )));
            }

            let data: TokenData = response.unmarshal().map_err(|err| {
                self.logger().error(&format!("failed to get token, decode error: {err}"));
                GhinkError::TokenAcquisition(format!("decode error: {err}"))
            })?;

            self.credentials.set_token(data.token).await;
            Ok(())
        })
    }
}
