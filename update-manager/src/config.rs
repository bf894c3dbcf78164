//! Polling configuration

use std::time::Duration;

/// Configuration for the update polling loop
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay between the completion of one poll and the start of the next
    pub check_interval: Duration,

    /// Batch size limit passed to `getUpdates` (1-100); `None` leaves the
    /// limit to the service default
    pub batch_limit: Option<u8>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_millis(1000),
            batch_limit: None,
        }
    }
}

impl PollerConfig {
    /// Set the delay between polls
    #[must_use]
    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    /// Set the batch size limit
    #[must_use]
    pub fn with_batch_limit(mut self, limit: u8) -> Self {
        self.batch_limit = Some(limit);
        self
    }
}
