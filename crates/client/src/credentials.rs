//! Credential storage
//!
//! Holds the static key pair and the current bearer token. The token is the
//! only mutable state shared between concurrent calls; it is replaced whole
//! under a write lock so a reader never observes a partially written value.
//! The lock is never held across a network call.

use tokio::sync::RwLock;

pub(crate) struct CredentialStore {
    secret_id: String,
    secret_key: String,
    token: RwLock<String>,
}

impl CredentialStore {
    /// Creates a store with an empty token; the token stays empty until the
    /// first acquisition.
    pub(crate) fn new(secret_id: String, secret_key: String) -> Self {
        Self { secret_id, secret_key, token: RwLock::new(String::new()) }
    }

    /// Authorization value for key mode. The upstream expects the literal
    /// colon-joined pair, not RFC 7617 base64.
    pub(crate) fn key_header(&self) -> String {
        format!("Basic {}:{}", self.secret_id, self.secret_key)
    }

    /// Authorization value for token mode, reading the current token.
    pub(crate) async fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token.read().await)
    }

    /// Replaces the stored token.
    pub(crate) async fn set_token(&self, token: String) {
        *self.token.write().await = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn key_header_joins_pair_with_colon() {
        let store = CredentialStore::new("id-1".to_string(), "key-1".to_string());

        assert_eq!(store.key_header(), "Basic id-1:key-1");
    }

    #[tokio::test]
    async fn bearer_header_reflects_latest_token() {
        let store = CredentialStore::new("id".to_string(), "key".to_string());
        assert_eq!(store.bearer_header().await, "Bearer ");

        store.set_token("tok-1".to_string()).await;
        assert_eq!(store.bearer_header().await, "Bearer tok-1");

        store.set_token("tok-2".to_string()).await;
        assert_eq!(store.bearer_header().await, "Bearer tok-2");
    }
}
