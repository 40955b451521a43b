//! Pluggable serialization seam
//!
//! The client never serializes payloads directly; everything crosses this
//! trait so a host can swap the JSON implementation without touching the
//! pipeline. Typed values enter and leave through `serde_json::Value`.

use ghink_domain::{GhinkError, Result};
use serde_json::Value;

/// Byte-level encoder/decoder used for payloads, envelopes, and the
/// re-serialized `data` sub-document.
pub trait Codec: Send + Sync {
    /// Serialize a JSON value into wire bytes.
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;

    /// Parse wire bytes back into a JSON value.
    fn decode(&self, bytes: &[u8]) -> Result<Value>;
}

/// Default codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|err| GhinkError::Encode(err.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        serde_json::from_slice(bytes).map_err(|err| GhinkError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_codec_round_trips_values() {
        let codec = JsonCodec;
        let value = json!({"link": "https://gh.ink", "validity": 1735689600});

        let bytes = codec.encode(&value).unwrap();
        let decoded = codec.decode(&bytes).unwrap();

        assert_eq!(decoded, value);
    }

    #[test]
    fn json_codec_rejects_malformed_input() {
        let codec = JsonCodec;

        let err = codec.decode(b"{not json").unwrap_err();
        assert!(matches!(err, GhinkError::Decode(_)));
    }
}
