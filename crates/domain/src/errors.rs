//! Error types used throughout the SDK

use thiserror::Error;

/// Main error type for the Ghink Open API SDK
#[derive(Error, Debug)]
pub enum GhinkError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to encode payload: {0}")]
    Encode(String),

    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    #[error("Failed to decode response data: {0}")]
    Decode(String),

    #[error("Failed to acquire token: {0}")]
    TokenAcquisition(String),

    #[error("Request failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, GhinkError>;
