//! # Ghink Client
//!
//! The resilient authenticated request pipeline of the Ghink Open API SDK.
//!
//! This crate contains:
//! - Client configuration and construction
//! - The pluggable codec and log sink seams
//! - HTTP transport (single round trip, reqwest-backed)
//! - Credential storage and bearer-token lifecycle
//! - The retrying sender and response envelope parsing
//!
//! ## Architecture
//! - Depends only on `ghink-domain`
//! - Calls run on the caller's task; no background scheduler
//! - The only shared mutable state is the current bearer token

mod backoff;
mod credentials;
mod transport;

pub mod client;
pub mod codec;
pub mod config;
pub mod logging;
pub mod response;
pub mod sender;

// Re-export commonly used items
pub use client::Client;
pub use codec::{Codec, JsonCodec};
pub use config::{ClientBuilder, ClientConfig};
pub use logging::{LogSink, TracingSink};
pub use reqwest::Method;
pub use response::ApiResponse;
pub use sender::Sender;
