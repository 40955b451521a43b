//! Service-level error types

use ghink_domain::GhinkError;
use thiserror::Error;

/// Errors returned by the typed service callers
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request pipeline failed before a usable upstream answer arrived.
    #[error("Sender error: {0}")]
    Client(#[from] GhinkError),

    /// The upstream answered but rejected the request at the API level.
    #[error("Upstream failed: code: {code}, msg: {msg}")]
    Upstream { code: i64, msg: String },
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
