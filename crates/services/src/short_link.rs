//! Short links
//!
//! Creates short links with an expiry timestamp; the upstream assigns and
//! returns the link ID.

use chrono::{DateTime, Utc};
use ghink_client::{Client, Method};
use ghink_domain::MapAny;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{Result, ServiceError};

/// Path prefix of the short-link service, relative to the client endpoint.
const SERVICE_PATH: &str = "/shortLink";

#[derive(Debug, Deserialize)]
struct LinkData {
    #[serde(rename = "linkID")]
    link_id: String,
}

/// Creates a short link valid until `validity`, returning the
/// upstream-assigned link ID.
pub async fn add(client: &Client, link: &str, validity: DateTime<Utc>) -> Result<String> {
    let mut payload = MapAny::new();
    payload.insert("link".to_string(), Value::from(link));
    payload.insert("validity".to_string(), Value::from(validity.timestamp()));

    let url = format!("{}{}/add", client.endpoint(), SERVICE_PATH);
    let response = client
        .send(&url, Method::POST, Some(Value::Object(payload)))
        .with_token()
        .await
        .map_err(|err| {
            client.logger().error(&format!("failed to add short link, sender error: {err}"));
            err
        })?;

    if !response.ok() {
        client.logger().error(&format!(
            "failed to add short link, upstream failed: code: {}, msg: {}",
            response.code, response.msg,
        ));
        return Err(ServiceError::Upstream { code: response.code, msg: response.msg });
    }

    let data: LinkData = response.unmarshal().map_err(|err| {
        client.logger().error(&format!("failed to add short link, decode error: {err}"));
        err
    })?;

    Ok(data.link_id)
}
