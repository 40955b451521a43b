//! Response envelope parsing
//!
//! Every upstream body arrives wrapped in `{code, msg, data}`. Parsing
//! decodes the wrapper and re-serializes the `data` field alone, so typed
//! callers decode only the business payload without knowing the envelope
//! shape.

use std::fmt;
use std::sync::Arc;

use ghink_domain::{Envelope, GhinkError, Result};
use serde::de::DeserializeOwned;

use crate::codec::Codec;

/// Parsed upstream answer for one call.
///
/// `code` and `msg` are API-level (distinct from the HTTP status); `body`
/// holds the re-serialized `data` sub-document. A failing business code is
/// still delivered here, not as an error: check [`ApiResponse::ok`] before
/// trusting the payload.
pub struct ApiResponse {
    pub code: i64,
    pub msg: String,
    pub body: Vec<u8>,
    codec: Arc<dyn Codec>,
}

impl ApiResponse {
    /// Whether the upstream accepted the request (API code 200).
    pub fn ok(&self) -> bool {
        self.code == 200
    }

    /// Decodes the `data` payload into a typed value through the codec.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T> {
        let value = self.codec.decode(&self.body)?;
        serde_json::from_value(value).map_err(|err| GhinkError::Decode(err.to_string()))
    }
}

impl fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("code", &self.code)
            .field("msg", &self.msg)
            .field("body", &String::from_utf8_lossy(&self.body))
            .finish_non_exhaustive()
    }
}

/// Decodes a wire body into an [`ApiResponse`].
///
/// Fails on a malformed envelope and also when the `data` field cannot be
/// re-encoded, even if the outer decode succeeded.
pub(crate) fn parse_envelope(codec: &Arc<dyn Codec>, body: &[u8]) -> Result<ApiResponse> {
    let value = codec.decode(body)?;
    let envelope: Envelope =
        serde_json::from_value(value).map_err(|err| GhinkError::Decode(err.to_string()))?;

    let data = codec.encode(&envelope.data)?;

    Ok(ApiResponse { code: envelope.code, msg: envelope.msg, body: data, codec: Arc::clone(codec) })
}
