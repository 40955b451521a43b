//! Injected log sink
//!
//! Four leveled methods, injectable at construction. The default sink
//! forwards to `tracing`, so output format and filtering stay under the
//! host's `tracing-subscriber` configuration.

/// Leveled logging capability injected into the client.
pub trait LogSink: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default sink that emits through the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "ghink_client", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "ghink_client", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "ghink_client", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "ghink_client", "{message}");
    }
}
