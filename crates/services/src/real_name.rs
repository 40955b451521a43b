//! Real-name verification
//!
//! Structural validation of Chinese Mainland ID numbers plus the upstream
//! verification call. Structurally invalid IDs are rejected locally without
//! touching the network.

use chrono::NaiveDate;
use ghink_client::{Client, Method};
use ghink_domain::MapAny;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{Result, ServiceError};

/// Path prefix of the real-name service, relative to the client endpoint.
const SERVICE_PATH: &str = "/realName";

/// Per-position weights of the mod-11 checksum over the first 17 digits.
const CHECKSUM_FACTORS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Expected checksum character, indexed by the weighted sum modulo 11.
const CHECKSUM_CHARS: &[u8; 11] = b"10X98765432";

/// Checks whether year/month/day form a real calendar date.
pub fn is_valid_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Checks whether `id` is structurally a valid Chinese Mainland ID number:
/// 17 digits plus a digit-or-`X` checksum character, an embedded real birth
/// date, and a matching weighted mod-11 checksum.
pub fn is_valid_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() != 18 {
        return false;
    }
    if !bytes[..17].iter().all(u8::is_ascii_digit) {
        return false;
    }

    let checksum_char = bytes[17].to_ascii_uppercase();
    if checksum_char != b'X' && !checksum_char.is_ascii_digit() {
        return false;
    }

    // The first 17 bytes are ASCII digits, so these slices always parse.
    let (Ok(year), Ok(month), Ok(day)) =
        (id[6..10].parse::<i32>(), id[10..12].parse::<u32>(), id[12..14].parse::<u32>())
    else {
        return false;
    };
    if !is_valid_date(year, month, day) {
        return false;
    }

    let total: u32 = bytes[..17]
        .iter()
        .zip(CHECKSUM_FACTORS)
        .map(|(byte, factor)| u32::from(byte - b'0') * factor)
        .sum();

    CHECKSUM_CHARS[(total % 11) as usize] == checksum_char
}

#[derive(Debug, Deserialize)]
struct VerifyData {
    ok: bool,
}

/// Verifies an ID/name pair against the real-name service.
///
/// Structurally invalid IDs return `Ok(false)` without a network call.
pub async fn verify_cnid(client: &Client, id: &str, name: &str) -> Result<bool> {
    if !is_valid_id(id) {
        return Ok(false);
    }

    let mut payload = MapAny::new();
    payload.insert("id".to_string(), Value::from(id));
    payload.insert("name".to_string(), Value::from(name));

    let url = format!("{}{}/cnid", client.endpoint(), SERVICE_PATH);
    let response = client
        .send(&url, Method::POST, Some(Value::Object(payload)))
        .with_token()
        .await
        .map_err(|err| {
            client.logger().error(&format!("failed to verify CNID, sender error: {err}"));
            err
        })?;

    if !response.ok() {
        client.logger().error(&format!(
            "failed to verify CNID, upstream failed: code: {}, msg: {}",
            response.code, response.msg,
        ));
        return Err(ServiceError::Upstream { code: response.code, msg: response.msg });
    }

    let data: VerifyData = response.unmarshal().map_err(|err| {
        client.logger().error(&format!("failed to verify CNID, decode error: {err}"));
        err
    })?;

    Ok(data.ok)
}
