//! Wire-level data types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object payload, keyed by field name.
pub type MapAny = serde_json::Map<String, Value>;

/// Outer wrapper the upstream puts around every response body.
///
/// `code` is the API-level status (distinct from the HTTP status), `msg` is a
/// human-readable explanation, and `data` carries the operation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_wire_shape() {
        let body = r#"{"code":200,"msg":"ok","data":{"token":"abc"}}"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.msg, "ok");
        assert_eq!(envelope.data["token"], "abc");
    }

    #[test]
    fn envelope_tolerates_missing_data() {
        let body = r#"{"code":801,"msg":"permission denied"}"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();

        assert_eq!(envelope.code, 801);
        assert!(envelope.data.is_null());
    }
}
