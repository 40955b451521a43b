//! Inter-attempt delay schedule
//!
//! One `Backoff` lives for the duration of a single call. The delay starts
//! at the configured base and doubles after each applied wait when
//! exponential backoff is enabled; otherwise it stays fixed.

use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct Backoff {
    delay: Duration,
    exponential: bool,
}

impl Backoff {
    pub(crate) fn new(base_delay: Duration, exponential: bool) -> Self {
        Self { delay: base_delay, exponential }
    }

    /// Returns the current delay and advances the schedule.
    pub(crate) fn advance(&mut self) -> Duration {
        let current = self.delay;
        if self.exponential {
            self.delay = self.delay.saturating_mul(2);
        }
        current
    }

    /// Sleeps for the current delay, then advances the schedule.
    pub(crate) async fn wait(&mut self) {
        let delay = self.advance();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
